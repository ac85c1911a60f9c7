//! 通用类型定义
//!
//! 顶点标签、边权重、距离以及各种操作结果

use num_traits::CheckedAdd;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// 顶点标签
///
/// 需要相等与全序比较，哈希用于标签索引。
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// 边权重
///
/// `W::default()` 视为零权重；路径长度用 `CheckedAdd` 累加，溢出时报告错误。
pub trait Weight:
    Copy + PartialOrd + Add<Output = Self> + CheckedAdd + Default + fmt::Debug + fmt::Display
{
}

impl<T> Weight for T where
    T: Copy + PartialOrd + Add<Output = T> + CheckedAdd + Default + fmt::Debug + fmt::Display
{
}

/// 零权重
pub fn zero<W: Weight>() -> W {
    W::default()
}

/// 当前距离
///
/// `Infinite` 大于任何有限距离（变体顺序决定比较结果）。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// 有限距离的值
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }

    /// 沿一条边延伸，超出 `W` 的表示范围时返回 None
    pub fn extend(&self, weight: W) -> Option<Self> {
        match self {
            Distance::Finite(d) => d.checked_add(&weight).map(Distance::Finite),
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "INF"),
        }
    }
}

/// 遍历访问状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VisitState {
    /// 未访问
    #[default]
    Unvisited,
    /// 已发现（BFS 入队 / 进入生成树候选）
    InProgress,
    /// 已完成
    Done,
}

/// 边模式：有向图使用单向边，无向图使用双向边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeMode {
    #[default]
    Directed,
    Undirected,
}

impl EdgeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeMode::Directed => "directed",
            EdgeMode::Undirected => "undirected",
        }
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 添加双向边 (v1,v2) 的结果
///
/// 两个方向独立添加，任一方向可能已经存在。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiDirAddOutcome {
    /// <v1,v2> 与 <v2,v1> 均已添加
    BothAdded,
    /// <v1,v2> 已存在，<v2,v1> 已添加
    ForwardExisted,
    /// <v2,v1> 已存在，<v1,v2> 已添加
    BackwardExisted,
    /// 两个方向都已存在，未做修改
    BothExisted,
}

impl BiDirAddOutcome {
    /// 是否至少添加了一条有向边
    pub fn added_any(&self) -> bool {
        !matches!(self, BiDirAddOutcome::BothExisted)
    }
}

/// 删除双向边 (v1,v2) 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiDirDeleteOutcome {
    /// 两个方向均已删除
    BothDeleted,
    /// <v1,v2> 已删除，<v2,v1> 不存在
    OnlyForwardDeleted,
    /// <v2,v1> 已删除，<v1,v2> 不存在
    OnlyBackwardDeleted,
    /// 两个方向都不存在
    NeitherExisted,
}

impl BiDirDeleteOutcome {
    pub fn deleted_any(&self) -> bool {
        !matches!(self, BiDirDeleteOutcome::NeitherExisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_is_greater_than_finite() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(1) < Distance::Finite(2));
        assert_eq!(Distance::<i64>::default(), Distance::Infinite);
    }

    #[test]
    fn test_extend() {
        assert_eq!(Distance::Finite(3).extend(4), Some(Distance::Finite(7)));
        assert_eq!(Distance::<i32>::Infinite.extend(4), Some(Distance::Infinite));
        assert_eq!(Distance::Finite(i64::MAX).extend(1), None);
        assert_eq!(Distance::Finite(i8::MIN).extend(-1), None);
        assert_eq!(Distance::<u64>::zero().finite(), Some(0));
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Finite(12).to_string(), "12");
        assert_eq!(Distance::<u32>::Infinite.to_string(), "INF");
    }
}
