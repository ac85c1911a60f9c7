//! 顶点定义
//!
//! 顶点拥有自己的出边邻接表，以及算法运行时复用的状态字段

use super::edge::Edge;
use crate::types::{Distance, Label, VisitState, Weight};
use serde::{Deserialize, Serialize};

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex<V, W> {
    /// 顶点标签
    label: V,
    /// 遍历访问状态
    pub(crate) visited: VisitState,
    /// 路径前驱（默认为自身）
    pub(crate) predecessor: V,
    /// 当前距离（默认为无穷大）
    pub(crate) distance: Distance<W>,
    /// 出边邻接表（按插入顺序）
    pub(crate) edges: Vec<Edge<V, W>>,
}

impl<V: Label, W: Weight> Vertex<V, W> {
    /// 创建新顶点
    pub fn new(label: V) -> Self {
        Self {
            predecessor: label.clone(),
            label,
            visited: VisitState::Unvisited,
            distance: Distance::Infinite,
            edges: Vec::new(),
        }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &V {
        &self.label
    }

    pub fn visited(&self) -> VisitState {
        self.visited
    }

    pub fn predecessor(&self) -> &V {
        &self.predecessor
    }

    pub fn distance(&self) -> Distance<W> {
        self.distance
    }

    /// 获取所有出边
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// 查找指向 dst 的出边
    pub fn edge_to(&self, dst: &V) -> Option<&Edge<V, W>> {
        self.edges.iter().find(|e| e.points_to(dst))
    }

    pub fn has_edge_to(&self, dst: &V) -> bool {
        self.edge_to(dst).is_some()
    }

    /// 出度
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// 追加出边，调用方负责去重
    pub(crate) fn push_edge(&mut self, dst: V, weight: W) {
        self.edges.push(Edge::new(dst, weight));
    }

    /// 移除指向 dst 的出边
    pub(crate) fn remove_edge_to(&mut self, dst: &V) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !e.points_to(dst));
        self.edges.len() != before
    }

    /// 恢复默认状态：未访问、距离无穷大、前驱为自身
    pub(crate) fn reset(&mut self) {
        self.visited = VisitState::Unvisited;
        self.distance = Distance::Infinite;
        self.predecessor = self.label.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_defaults() {
        let v: Vertex<&str, i32> = Vertex::new("A");

        assert_eq!(v.label(), &"A");
        assert_eq!(v.predecessor(), &"A");
        assert_eq!(v.distance(), Distance::Infinite);
        assert_eq!(v.visited(), VisitState::Unvisited);
        assert_eq!(v.out_degree(), 0);
    }

    #[test]
    fn test_vertex_edges() {
        let mut v: Vertex<&str, i32> = Vertex::new("A");
        v.push_edge("B", 3);
        v.push_edge("C", 1);

        assert!(v.has_edge_to(&"B"));
        assert_eq!(v.edge_to(&"C").map(|e| e.weight()), Some(1));
        assert!(v.remove_edge_to(&"B"));
        assert!(!v.remove_edge_to(&"B"));
        assert_eq!(v.out_degree(), 1);
    }

    #[test]
    fn test_vertex_reset() {
        let mut v: Vertex<&str, i32> = Vertex::new("A");
        v.visited = VisitState::Done;
        v.distance = Distance::Finite(4);
        v.predecessor = "Z";

        v.reset();

        assert_eq!(v.visited(), VisitState::Unvisited);
        assert_eq!(v.distance(), Distance::Infinite);
        assert_eq!(v.predecessor(), &"A");
    }
}
