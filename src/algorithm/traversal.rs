//! 图遍历算法
//!
//! 广度优先、递归深度优先、迭代深度优先。每次遍历开始前都会重置全图的访问状态。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Label, VisitState, Weight};
use std::collections::VecDeque;
use tracing::debug;

impl<V: Label, W: Weight> Graph<V, W> {
    /// 广度优先遍历，返回访问顺序
    ///
    /// 入队时标记为 `InProgress`，出队时标记为 `Done`；邻居按邻接表顺序入队。
    #[tracing::instrument(skip(self))]
    pub fn breadth_first(&mut self, start: &V) -> Result<Vec<V>> {
        let start_idx = self.start_index(start)?;
        self.reset_all();

        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        self.vertices[start_idx].visited = VisitState::InProgress;
        queue.push_back(start_idx);

        while let Some(idx) = queue.pop_front() {
            let vertex = &mut self.vertices[idx];
            vertex.visited = VisitState::Done;
            debug!(vertex = %vertex.label(), "BFS 访问");
            order.push(vertex.label().clone());

            for (next, _) in self.out_edges(idx) {
                let neighbor = &mut self.vertices[next];
                if neighbor.visited == VisitState::Unvisited {
                    neighbor.visited = VisitState::InProgress;
                    queue.push_back(next);
                }
            }
        }

        Ok(order)
    }

    /// 递归深度优先遍历，返回访问顺序
    #[tracing::instrument(skip(self))]
    pub fn depth_first_recursive(&mut self, start: &V) -> Result<Vec<V>> {
        let start_idx = self.start_index(start)?;
        self.reset_all();

        let mut order = Vec::new();
        self.visit_recursive(start_idx, &mut order);
        Ok(order)
    }

    fn visit_recursive(&mut self, idx: usize, order: &mut Vec<V>) {
        let vertex = &mut self.vertices[idx];
        vertex.visited = VisitState::Done;
        debug!(vertex = %vertex.label(), "DFS 访问");
        order.push(vertex.label().clone());

        for (next, _) in self.out_edges(idx) {
            if self.vertices[next].visited == VisitState::Unvisited {
                self.visit_recursive(next, order);
            }
        }
    }

    /// 迭代深度优先遍历（显式栈），返回访问顺序
    ///
    /// 出栈时才标记为 `Done`，已完成的顶点出栈后直接跳过；邻居逆序入栈，
    /// 因此子顶点仍按邻接表顺序展开，得到与递归版本相同的先序。
    #[tracing::instrument(skip(self))]
    pub fn depth_first_iterative(&mut self, start: &V) -> Result<Vec<V>> {
        let start_idx = self.start_index(start)?;
        self.reset_all();

        let mut order = Vec::new();
        let mut stack = vec![start_idx];
        self.vertices[start_idx].visited = VisitState::InProgress;

        while let Some(idx) = stack.pop() {
            let vertex = &mut self.vertices[idx];
            if vertex.visited == VisitState::Done {
                continue;
            }
            vertex.visited = VisitState::Done;
            debug!(vertex = %vertex.label(), stack = stack.len(), "DFS 访问");
            order.push(vertex.label().clone());

            for (next, _) in self.out_edges(idx).into_iter().rev() {
                let neighbor = &mut self.vertices[next];
                if neighbor.visited != VisitState::Done {
                    neighbor.visited = VisitState::InProgress;
                    stack.push(next);
                }
            }
        }

        Ok(order)
    }

    fn start_index(&self, start: &V) -> Result<usize> {
        self.index_of(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))
    }
}
