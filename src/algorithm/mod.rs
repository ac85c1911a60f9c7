//! 图算法模块
//!
//! 包含遍历、最短路径和最小生成树算法，均以 `Graph` 方法的形式提供

mod mst;
mod shortest_path;
mod traversal;

pub use mst::{MstEdge, MstReport};
pub use shortest_path::{FordEntry, FordPass, FordReport, ShortestPath};
