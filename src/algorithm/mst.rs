//! 最小生成树（Prim 算法）
//!
//! 适用于无向图（每条无向边由两条有向边表示）。结果是一个新的图，
//! 由源图持有，每次重新计算时整体替换。
//! 非连通图只生成起点所在连通分量的生成树。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{zero, Distance, Label, VisitState, Weight};
use serde::Serialize;
use tracing::debug;

/// 生成树中的一条边
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstEdge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MstReport<V, W> {
    /// 起点；空图时为 None
    pub root: Option<V>,
    /// 按加入顺序排列的树边
    pub edges: Vec<MstEdge<V, W>>,
    /// 树边权重之和
    pub total_weight: W,
}

impl<V: Label, W: Weight> MstReport<V, W> {
    fn empty() -> Self {
        Self {
            root: None,
            edges: Vec::new(),
            total_weight: zero(),
        }
    }

    /// 生成树覆盖的顶点数
    pub fn vertex_count(&self) -> usize {
        if self.root.is_some() {
            self.edges.len() + 1
        } else {
            0
        }
    }
}

impl<V: Label, W: Weight> Graph<V, W> {
    /// 以第一个顶点为起点计算最小生成树
    ///
    /// 空图不做任何计算，返回空结果并清除已保存的生成树。
    pub fn minimum_spanning_tree(&mut self) -> Result<MstReport<V, W>> {
        let root = self.labels().next().cloned();
        match root {
            Some(root) => self.minimum_spanning_tree_from(&root),
            None => {
                self.min_tree = None;
                Ok(MstReport::empty())
            }
        }
    }

    /// 以 start 为起点计算最小生成树
    #[tracing::instrument(skip(self))]
    pub fn minimum_spanning_tree_from(&mut self, start: &V) -> Result<MstReport<V, W>> {
        let start_idx = self
            .index_of(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

        self.reset_all();
        self.vertices[start_idx].distance = Distance::zero();

        let mut tree = Graph::new();
        let mut report: MstReport<V, W> = MstReport {
            root: Some(start.clone()),
            ..MstReport::empty()
        };

        // take_minimum 把选中的顶点标记为 Done，即已在树中
        let mut candidates: Vec<usize> = (0..self.vertices.len()).collect();
        while let Some(idx) = self.take_minimum(&mut candidates) {
            let vertex = &self.vertices[idx];
            let label = vertex.label().clone();
            let predecessor = vertex.predecessor().clone();
            let distance = vertex.distance();

            tree.add_vertex(label.clone())?;
            if let (true, Distance::Finite(weight)) = (predecessor != label, distance) {
                debug!(from = %predecessor, to = %label, weight = %weight, "MST 选边");
                tree.add_bidir_edge(&predecessor, &label, weight)?;
                report.total_weight = report
                    .total_weight
                    .checked_add(&weight)
                    .ok_or_else(|| Error::weight_overflow(&predecessor, &label))?;
                report.edges.push(MstEdge {
                    from: predecessor,
                    to: label,
                    weight,
                });
            }

            for (next, weight) in self.out_edges(idx) {
                if self.vertices[next].visited == VisitState::Done {
                    continue;
                }
                if self.relax(idx, next, Distance::Finite(weight)) {
                    self.vertices[next].visited = VisitState::InProgress;
                }
            }
        }

        debug!(
            edges = report.edges.len(),
            total = %report.total_weight,
            "MST 完成"
        );
        self.min_tree = Some(Box::new(tree));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn normalized<V: Label, W: Weight>(report: &MstReport<V, W>) -> Vec<(V, V)> {
        let mut edges: Vec<(V, V)> = report
            .edges
            .iter()
            .map(|e| {
                if e.from <= e.to {
                    (e.from.clone(), e.to.clone())
                } else {
                    (e.to.clone(), e.from.clone())
                }
            })
            .collect();
        edges.sort();
        edges
    }

    fn create_test_graph() -> Graph<&'static str, i32> {
        let mut graph = Graph::new();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_bidir_edge(&"A", &"B", 1).unwrap();
        graph.add_bidir_edge(&"B", &"C", 2).unwrap();
        graph.add_bidir_edge(&"C", &"D", 3).unwrap();
        graph.add_bidir_edge(&"A", &"D", 4).unwrap();
        graph.add_bidir_edge(&"A", &"C", 5).unwrap();
        graph.add_bidir_edge(&"B", &"D", 6).unwrap();
        graph
    }

    #[test]
    fn test_mst_edge_set_independent_of_start() {
        let mut graph = create_test_graph();
        let expected = vec![("A", "B"), ("B", "C"), ("C", "D")];

        for start in ["A", "B", "C", "D"] {
            let report = graph.minimum_spanning_tree_from(&start).unwrap();
            assert_eq!(normalized(&report), expected);
            assert_eq!(report.total_weight, 6);
            assert_eq!(report.root, Some(start));
        }
    }

    #[test]
    fn test_mst_graph_is_stored() {
        let mut graph = create_test_graph();
        let report = graph.minimum_spanning_tree().unwrap();
        assert_eq!(report.root, Some("A"));
        assert_eq!(report.vertex_count(), 4);

        let tree = graph.min_tree().unwrap();
        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.edge_count(), 6);
        assert!(tree.is_bidir_edge(&"A", &"B"));
        assert!(tree.is_bidir_edge(&"B", &"C"));
        assert!(tree.is_bidir_edge(&"C", &"D"));
        assert!(!tree.is_uni_edge(&"A", &"D"));
    }

    #[test]
    fn test_mst_replaced_on_recompute() {
        let mut graph = create_test_graph();
        graph.minimum_spanning_tree().unwrap();

        graph.delete_vertex(&"B").unwrap();
        let report = graph.minimum_spanning_tree().unwrap();

        assert_eq!(normalized(&report), vec![("A", "D"), ("C", "D")]);
        assert_eq!(report.total_weight, 7);
        assert!(!graph.min_tree().unwrap().is_vertex(&"B"));
    }

    #[test]
    fn test_mst_disconnected_spans_start_component() {
        let mut graph = create_test_graph();
        graph.add_vertex("X").unwrap();
        graph.add_vertex("Y").unwrap();
        graph.add_bidir_edge(&"X", &"Y", 9).unwrap();

        let report = graph.minimum_spanning_tree_from(&"X").unwrap();
        assert_eq!(normalized(&report), vec![("X", "Y")]);
        assert_eq!(graph.min_tree().unwrap().vertex_count(), 2);

        let report = graph.minimum_spanning_tree_from(&"A").unwrap();
        assert_eq!(report.edges.len(), 3);
        assert!(!graph.min_tree().unwrap().is_vertex(&"X"));
    }

    #[test]
    fn test_mst_empty_graph_is_noop() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let report = graph.minimum_spanning_tree().unwrap();

        assert_eq!(report.root, None);
        assert!(report.edges.is_empty());
        assert_eq!(report.total_weight, 0);
        assert!(graph.min_tree().is_none());
    }

    #[test]
    fn test_mst_cleared_when_graph_becomes_empty() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_vertex("A").unwrap();
        graph.minimum_spanning_tree().unwrap();
        assert_eq!(graph.min_tree().map(Graph::vertex_count), Some(1));

        graph.delete_vertex(&"A").unwrap();
        let report = graph.minimum_spanning_tree().unwrap();
        assert_eq!(report.vertex_count(), 0);
        assert!(graph.min_tree().is_none());
    }

    #[test]
    fn test_mst_total_weight_overflow() {
        let mut graph: Graph<&str, i64> = Graph::new();
        for v in ["A", "B", "C"] {
            graph.add_vertex(v).unwrap();
        }
        graph.add_bidir_edge(&"A", &"B", i64::MAX).unwrap();
        graph.add_bidir_edge(&"B", &"C", i64::MAX).unwrap();

        assert!(matches!(
            graph.minimum_spanning_tree(),
            Err(Error::WeightOverflow { .. })
        ));

        graph.delete_bidir_edge(&"B", &"C").unwrap();
        let report = graph.minimum_spanning_tree().unwrap();
        assert_eq!(report.total_weight, i64::MAX);
    }

    #[test]
    fn test_mst_missing_start() {
        let mut graph = create_test_graph();
        assert!(matches!(
            graph.minimum_spanning_tree_from(&"Z"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_mst_total_weight_independent_of_start() {
        let mut rng = StdRng::seed_from_u64(2020);

        for _ in 0..20 {
            let n = rng.gen_range(2..9u32);
            let mut graph: Graph<u32, u32> = Graph::new();
            for v in 0..n {
                graph.add_vertex(v).unwrap();
            }
            // 先连成一条链保证连通，再随机加边（权重可能相同）
            for v in 1..n {
                let u = rng.gen_range(0..v);
                graph.add_bidir_edge(&u, &v, rng.gen_range(1..6)).unwrap();
            }
            for _ in 0..n {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                if a != b {
                    let _ = graph.add_bidir_edge(&a, &b, rng.gen_range(1..6));
                }
            }

            let baseline = graph.minimum_spanning_tree_from(&0).unwrap();
            assert_eq!(baseline.edges.len() as u32, n - 1);
            for start in 1..n {
                let report = graph.minimum_spanning_tree_from(&start).unwrap();
                assert_eq!(report.total_weight, baseline.total_weight);
            }
        }
    }
}
