//! 边定义
//!
//! 边只属于源顶点的邻接表，本身只记录目标顶点标签和权重

use crate::types::{Label, Weight};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 有向边（邻接表条目）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V, W> {
    /// 目标顶点标签
    dst: V,
    /// 边权重
    weight: W,
}

impl<V: Label, W: Weight> Edge<V, W> {
    /// 创建新边
    pub fn new(dst: V, weight: W) -> Self {
        Self { dst, weight }
    }

    /// 获取目标顶点
    pub fn dst(&self) -> &V {
        &self.dst
    }

    /// 获取权重
    pub fn weight(&self) -> W {
        self.weight
    }

    /// 是否指向给定顶点
    pub fn points_to(&self, label: &V) -> bool {
        &self.dst == label
    }
}

impl<V: fmt::Display, W: fmt::Display> fmt::Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.dst, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_basic() {
        let e = Edge::new("B".to_string(), 5);

        assert_eq!(e.dst(), "B");
        assert_eq!(e.weight(), 5);
        assert!(e.points_to(&"B".to_string()));
        assert!(!e.points_to(&"C".to_string()));
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new('X', 2.5);
        assert_eq!(e.to_string(), "(X,2.5)");
    }
}
