//! 图数据结构
//!
//! 基于邻接表的图：按插入顺序保存的顶点表，每个顶点拥有自己的出边列表。
//! 无向边由两条独立的有向边表示，允许只存在一个方向。

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{BiDirAddOutcome, BiDirDeleteOutcome, Label, Weight};
use indexmap::IndexMap;
use std::fmt;

/// 图
#[derive(Debug, Clone)]
pub struct Graph<V, W> {
    /// 顶点表（标签 -> 顶点，保持插入顺序）
    pub(crate) vertices: IndexMap<V, Vertex<V, W>>,
    /// 最近一次计算出的最小生成树
    pub(crate) min_tree: Option<Box<Graph<V, W>>>,
}

impl<V: Label, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Label, W: Weight> Graph<V, W> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
            min_tree: None,
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, label: V) -> Result<()> {
        if self.vertices.contains_key(&label) {
            return Err(Error::VertexAlreadyExists(label.to_string()));
        }
        self.vertices.insert(label.clone(), Vertex::new(label));
        Ok(())
    }

    /// 删除顶点，同时删除其它顶点指向它的所有边
    pub fn delete_vertex(&mut self, label: &V) -> Result<()> {
        if self.vertices.shift_remove(label).is_none() {
            return Err(Error::VertexNotFound(label.to_string()));
        }
        for vertex in self.vertices.values_mut() {
            vertex.remove_edge_to(label);
        }
        Ok(())
    }

    /// 判断顶点是否存在
    pub fn is_vertex(&self, label: &V) -> bool {
        self.vertices.contains_key(label)
    }

    /// 获取顶点
    pub fn vertex(&self, label: &V) -> Option<&Vertex<V, W>> {
        self.vertices.get(label)
    }

    /// 按插入顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V, W>> {
        self.vertices.values()
    }

    /// 按插入顺序遍历所有顶点标签
    pub fn labels(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 获取有向边数量
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|v| v.out_degree()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 单向边操作 ====================

    /// 添加有向边 <src,dst>
    pub fn add_uni_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<()> {
        if !self.vertices.contains_key(dst) {
            return Err(Error::endpoint_missing(src, dst));
        }
        let vertex = self
            .vertices
            .get_mut(src)
            .ok_or_else(|| Error::endpoint_missing(src, dst))?;
        if vertex.has_edge_to(dst) {
            return Err(Error::edge_exists(src, dst));
        }
        vertex.push_edge(dst.clone(), weight);
        Ok(())
    }

    /// 删除有向边 <src,dst>
    pub fn delete_uni_edge(&mut self, src: &V, dst: &V) -> Result<()> {
        match self.vertices.get_mut(src).map(|v| v.remove_edge_to(dst)) {
            Some(true) => Ok(()),
            _ => Err(Error::edge_not_found(src, dst)),
        }
    }

    /// 判断有向边 <src,dst> 是否存在
    pub fn is_uni_edge(&self, src: &V, dst: &V) -> bool {
        self.vertices
            .get(src)
            .map(|v| v.has_edge_to(dst))
            .unwrap_or(false)
    }

    /// 获取有向边 <src,dst> 的权重
    pub fn edge_weight(&self, src: &V, dst: &V) -> Option<W> {
        self.vertices.get(src)?.edge_to(dst).map(Edge::weight)
    }

    /// 获取顶点的出边邻居（按邻接表顺序）
    pub fn neighbors(&self, label: &V) -> Vec<&V> {
        self.vertices
            .get(label)
            .map(|v| v.edges().iter().map(Edge::dst).collect())
            .unwrap_or_default()
    }

    // ==================== 双向边操作 ====================

    /// 添加双向边 (v1,v2)
    ///
    /// 两个方向独立添加。自环只对应一条有向边。
    pub fn add_bidir_edge(&mut self, v1: &V, v2: &V, weight: W) -> Result<BiDirAddOutcome> {
        if !self.is_vertex(v1) || !self.is_vertex(v2) {
            return Err(Error::endpoint_missing(v1, v2));
        }

        let forward_added = self.try_add_uni_edge(v1, v2, weight)?;
        if v1 == v2 {
            return Ok(if forward_added {
                BiDirAddOutcome::BothAdded
            } else {
                BiDirAddOutcome::BothExisted
            });
        }
        let backward_added = self.try_add_uni_edge(v2, v1, weight)?;

        Ok(match (forward_added, backward_added) {
            (true, true) => BiDirAddOutcome::BothAdded,
            (false, true) => BiDirAddOutcome::ForwardExisted,
            (true, false) => BiDirAddOutcome::BackwardExisted,
            (false, false) => BiDirAddOutcome::BothExisted,
        })
    }

    /// 删除双向边 (v1,v2)
    pub fn delete_bidir_edge(&mut self, v1: &V, v2: &V) -> Result<BiDirDeleteOutcome> {
        let forward_deleted = self.delete_uni_edge(v1, v2).is_ok();
        let backward_deleted = v1 != v2 && self.delete_uni_edge(v2, v1).is_ok();

        Ok(match (forward_deleted, backward_deleted) {
            (true, true) => BiDirDeleteOutcome::BothDeleted,
            (true, false) if v1 == v2 => BiDirDeleteOutcome::BothDeleted,
            (true, false) => BiDirDeleteOutcome::OnlyForwardDeleted,
            (false, true) => BiDirDeleteOutcome::OnlyBackwardDeleted,
            (false, false) => BiDirDeleteOutcome::NeitherExisted,
        })
    }

    /// 判断双向边 (v1,v2) 是否存在（两个方向都存在才算）
    pub fn is_bidir_edge(&self, v1: &V, v2: &V) -> bool {
        self.is_uni_edge(v1, v2) && self.is_uni_edge(v2, v1)
    }

    /// 添加有向边，已存在时返回 false
    fn try_add_uni_edge(&mut self, src: &V, dst: &V, weight: W) -> Result<bool> {
        match self.add_uni_edge(src, dst, weight) {
            Ok(()) => Ok(true),
            Err(Error::EdgeAlreadyExists { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    // ==================== 算法状态 ====================

    /// 获取最近一次计算出的最小生成树
    pub fn min_tree(&self) -> Option<&Graph<V, W>> {
        self.min_tree.as_deref()
    }

    /// 重置所有顶点的访问标记、距离与前驱
    pub(crate) fn reset_all(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.reset();
        }
    }

    /// 顶点在顶点表中的位置
    pub(crate) fn index_of(&self, label: &V) -> Option<usize> {
        self.vertices.get_index_of(label)
    }

    /// 第 idx 个顶点的出边：(目标位置, 权重)，按邻接表顺序
    pub(crate) fn out_edges(&self, idx: usize) -> Vec<(usize, W)> {
        self.vertices[idx]
            .edges()
            .iter()
            .filter_map(|e| self.index_of(e.dst()).map(|dst| (dst, e.weight())))
            .collect()
    }
}

impl<V: Label, W: Weight> fmt::Display for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            write!(f, "{}:", vertex.label())?;
            for edge in vertex.edges() {
                write!(f, " {}", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
