//! 最短路径算法
//!
//! Dijkstra（单对，非负权）与 Bellman-Ford（单源，逐轮松弛全部边）。
//! 两者复用顶点上的 distance / predecessor 字段，运行前统一重置。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{zero, Distance, Label, VisitState, Weight};
use serde::Serialize;
use tracing::{debug, trace};

/// 最短路径结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V, W> {
    /// 起点
    pub source: V,
    /// 终点
    pub target: V,
    /// 最短距离
    pub distance: W,
    /// 路径上的顶点序列（含起点与终点）
    pub path: Vec<V>,
}

impl<V, W> ShortestPath<V, W> {
    /// 路径边数
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Bellman-Ford 的一轮松弛
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FordPass<V> {
    /// 轮次（从 1 开始）
    pub pass: usize,
    /// 本轮距离被改进的顶点
    pub updated: Vec<V>,
}

/// Bellman-Ford 结束后单个顶点的状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FordEntry<V, W> {
    pub vertex: V,
    pub distance: Distance<W>,
    pub predecessor: V,
}

/// Bellman-Ford 结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FordReport<V, W> {
    /// 起点
    pub source: V,
    /// 每一轮的松弛记录，最后一轮没有任何改进
    pub passes: Vec<FordPass<V>>,
    /// 所有顶点的最终距离与前驱（按顶点插入顺序）
    pub entries: Vec<FordEntry<V, W>>,
}

impl<V: Label, W: Weight> FordReport<V, W> {
    /// 查询某个顶点的最终距离
    pub fn distance_to(&self, vertex: &V) -> Option<Distance<W>> {
        self.entries
            .iter()
            .find(|e| &e.vertex == vertex)
            .map(|e| e.distance)
    }
}

impl<V: Label, W: Weight> Graph<V, W> {
    /// Dijkstra 最短距离
    ///
    /// 候选集按顶点插入顺序排列，每次取出距离最小者（距离相同取最先出现的）。
    /// 起点/终点不存在、不可达、存在负权边分别返回不同的错误。
    #[tracing::instrument(skip(self))]
    pub fn shortest_distance(&mut self, src: &V, dst: &V) -> Result<ShortestPath<V, W>> {
        let src_idx = self
            .index_of(src)
            .ok_or_else(|| Error::SourceNotFound(src.to_string()))?;
        let dst_idx = self
            .index_of(dst)
            .ok_or_else(|| Error::TargetNotFound(dst.to_string()))?;
        self.check_non_negative()?;

        self.reset_all();
        self.vertices[src_idx].distance = Distance::zero();

        let mut candidates: Vec<usize> = (0..self.vertices.len()).collect();
        while let Some(idx) = self.take_minimum(&mut candidates) {
            if idx == dst_idx {
                break;
            }
            let from = self.vertices[idx].distance;
            for (next, weight) in self.out_edges(idx) {
                if self.vertices[next].visited == VisitState::Done {
                    continue;
                }
                let candidate = self.extend_along(idx, next, from, weight)?;
                self.relax(idx, next, candidate);
            }
        }

        match self.vertices[dst_idx].distance {
            Distance::Finite(distance) => Ok(ShortestPath {
                source: src.clone(),
                target: dst.clone(),
                distance,
                path: self.path_to(dst).unwrap_or_default(),
            }),
            Distance::Infinite => Err(Error::NoPathExists {
                from: src.to_string(),
                to: dst.to_string(),
            }),
        }
    }

    /// Bellman-Ford 单源最短路径
    ///
    /// 每一轮按顶点插入顺序松弛全部边，直到某一轮没有任何改进。
    /// 第 |V| 轮仍有改进说明存在可达的负权环。
    #[tracing::instrument(skip(self))]
    pub fn ford_shortest_paths(&mut self, src: &V) -> Result<FordReport<V, W>> {
        let src_idx = self
            .index_of(src)
            .ok_or_else(|| Error::VertexNotFound(src.to_string()))?;

        self.reset_all();
        self.vertices[src_idx].distance = Distance::zero();

        let n = self.vertices.len();
        let mut passes = Vec::new();

        for pass in 1..=n {
            let mut updated: Vec<V> = Vec::new();
            for idx in 0..n {
                let from = self.vertices[idx].distance;
                if !from.is_finite() {
                    continue;
                }
                for (next, weight) in self.out_edges(idx) {
                    let candidate = self.extend_along(idx, next, from, weight)?;
                    if self.relax(idx, next, candidate) {
                        let label = self.vertices[next].label();
                        if !updated.contains(label) {
                            updated.push(label.clone());
                        }
                    }
                }
            }

            debug!(pass, updated = ?updated, "Ford 松弛");
            let settled = updated.is_empty();
            passes.push(FordPass { pass, updated });

            if settled {
                let entries = self
                    .vertices()
                    .map(|v| FordEntry {
                        vertex: v.label().clone(),
                        distance: v.distance(),
                        predecessor: v.predecessor().clone(),
                    })
                    .collect();
                return Ok(FordReport {
                    source: src.clone(),
                    passes,
                    entries,
                });
            }
        }

        Err(Error::NegativeCycleDetected(src.to_string()))
    }

    /// 沿最近一次运行留下的前驱链重建到 dst 的路径
    ///
    /// 顶点不存在或上次运行未到达时返回 None。
    pub fn path_to(&self, dst: &V) -> Option<Vec<V>> {
        let mut current = self.vertex(dst)?;
        if !current.distance().is_finite() {
            return None;
        }

        let mut path = vec![current.label().clone()];
        while current.predecessor() != current.label() && path.len() <= self.vertex_count() {
            current = self.vertex(current.predecessor())?;
            path.push(current.label().clone());
        }
        path.reverse();
        Some(path)
    }

    /// 候选集中距离最小的顶点出队并标记为完成；剩余顶点全部不可达时返回 None
    pub(crate) fn take_minimum(&mut self, candidates: &mut Vec<usize>) -> Option<usize> {
        let mut best: Option<(usize, Distance<W>)> = None;
        for (pos, &idx) in candidates.iter().enumerate() {
            let distance = self.vertices[idx].distance;
            let better = match best {
                None => true,
                Some((_, best_distance)) => distance < best_distance,
            };
            if better {
                best = Some((pos, distance));
            }
        }

        let (pos, distance) = best?;
        if !distance.is_finite() {
            return None;
        }
        let idx = candidates.remove(pos);
        self.vertices[idx].visited = VisitState::Done;
        Some(idx)
    }

    /// 若 candidate 优于 next 的当前距离，则更新距离与前驱
    pub(crate) fn relax(&mut self, from: usize, next: usize, candidate: Distance<W>) -> bool {
        if candidate >= self.vertices[next].distance {
            return false;
        }
        let predecessor = self.vertices[from].label().clone();
        let vertex = &mut self.vertices[next];
        trace!(vertex = %vertex.label(), via = %predecessor, distance = %candidate, "松弛");
        vertex.distance = candidate;
        vertex.predecessor = predecessor;
        true
    }

    /// 沿边 <from,next> 延伸距离，溢出时返回 `WeightOverflow`
    fn extend_along(
        &self,
        from: usize,
        next: usize,
        distance: Distance<W>,
        weight: W,
    ) -> Result<Distance<W>> {
        distance.extend(weight).ok_or_else(|| {
            Error::weight_overflow(self.vertices[from].label(), self.vertices[next].label())
        })
    }

    fn check_non_negative(&self) -> Result<()> {
        for vertex in self.vertices() {
            if let Some(edge) = vertex.edges().iter().find(|e| e.weight() < zero()) {
                return Err(Error::NegativeWeight {
                    from: vertex.label().to_string(),
                    to: edge.dst().to_string(),
                });
            }
        }
        Ok(())
    }
}
