//! adjgraph - 基于邻接表的泛型图
//!
//! 有向/无向加权图及其经典算法：
//! - 顶点与边的增删查，双向边的四种结果
//! - 广度优先与深度优先遍历（递归/迭代）
//! - Dijkstra 与 Bellman-Ford 最短路径
//! - Prim 最小生成树
//! - 文本格式批量导入

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod logging;
pub mod types;

// 重导出常用类型
pub use algorithm::{FordEntry, FordPass, FordReport, MstEdge, MstReport, ShortestPath};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Vertex};
pub use import::{import_graph_file, GraphLoader, ImportStats};
pub use types::{BiDirAddOutcome, BiDirDeleteOutcome, Distance, EdgeMode, Label, VisitState, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
