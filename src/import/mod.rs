//! 数据导入模块
//!
//! 从文本描述批量导入图。格式为以空白分隔的记号流，`#` 之后到行尾为注释：
//!
//! ```text
//! <顶点数 n>
//! <顶点 1> ... <顶点 n>
//! <边数 m>
//! <起点> <终点> <权重>     （共 m 条）
//! ```
//!
//! 违反常规添加规则的条目（重复顶点、端点不存在、重复边）计入错误数并跳过；
//! 结构性错误（数量非数字、无法解析、记号不足）直接返回 `ParseError`，
//! 此时目标图恢复为导入前的状态。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{EdgeMode, Label, Weight};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 带行号的记号
struct Token<'a> {
    line: usize,
    text: &'a str,
}

/// 图导入器
pub struct GraphLoader<'g, V, W> {
    graph: &'g mut Graph<V, W>,
    mode: EdgeMode,
}

impl<'g, V, W> GraphLoader<'g, V, W>
where
    V: Label + FromStr,
    W: Weight + FromStr,
{
    /// 创建导入器（默认有向）
    pub fn new(graph: &'g mut Graph<V, W>) -> Self {
        Self {
            graph,
            mode: EdgeMode::Directed,
        }
    }

    /// 设置边模式：有向使用单向边，无向使用双向边
    pub fn with_mode(mut self, mode: EdgeMode) -> Self {
        self.mode = mode;
        self
    }

    /// 从文件导入
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let text = std::fs::read_to_string(path)?;
        self.load_str(&text)
    }

    /// 从字符串导入
    ///
    /// 失败时不会留下已导入的部分顶点和边。
    pub fn load_str(&mut self, text: &str) -> Result<ImportStats> {
        let snapshot = self.graph.clone();
        let result = self.load_tokens(text);
        if result.is_err() {
            *self.graph = snapshot;
        }
        result
    }

    fn load_tokens(&mut self, text: &str) -> Result<ImportStats> {
        let start = Instant::now();
        let mut tokens = tokenize(text).into_iter();
        let mut stats = ImportStats::default();

        let vertex_count = parse_count(&mut tokens, "顶点数")?;
        for _ in 0..vertex_count {
            let label: V = parse_next(&mut tokens, "顶点")?;
            match self.graph.add_vertex(label) {
                Ok(()) => stats.vertices_imported += 1,
                Err(e) => {
                    warn!(error = %e, "跳过顶点");
                    stats.errors += 1;
                }
            }
        }

        let edge_count = parse_count(&mut tokens, "边数")?;
        for _ in 0..edge_count {
            let src: V = parse_next(&mut tokens, "起点")?;
            let dst: V = parse_next(&mut tokens, "终点")?;
            let weight: W = parse_next(&mut tokens, "权重")?;

            if self.import_edge(&src, &dst, weight) {
                stats.edges_imported += 1;
            } else {
                stats.errors += 1;
            }
        }

        if let Some(extra) = tokens.next() {
            warn!(line = extra.line, token = extra.text, "忽略多余内容");
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(?stats, mode = %self.mode, "导入完成");
        Ok(stats)
    }

    /// 按当前模式添加一条边，至少添加了一个方向时返回 true
    fn import_edge(&mut self, src: &V, dst: &V, weight: W) -> bool {
        let result = match self.mode {
            EdgeMode::Directed => self.graph.add_uni_edge(src, dst, weight),
            EdgeMode::Undirected => match self.graph.add_bidir_edge(src, dst, weight) {
                Ok(outcome) if outcome.added_any() => Ok(()),
                Ok(_) => Err(Error::EdgeAlreadyExists {
                    from: src.to_string(),
                    to: dst.to_string(),
                }),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "跳过边");
                false
            }
        }
    }
}

/// 从文件导入图
pub fn import_graph_file<V, W, P>(
    graph: &mut Graph<V, W>,
    path: P,
    mode: EdgeMode,
) -> Result<ImportStats>
where
    V: Label + FromStr,
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    GraphLoader::new(graph).with_mode(mode).load_file(path)
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.lines()
        .enumerate()
        .flat_map(|(i, line)| {
            let content = line.split('#').next().unwrap_or("");
            content
                .split_whitespace()
                .map(move |text| Token { line: i + 1, text })
        })
        .collect()
}

fn parse_next<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = Token<'a>>,
    what: &str,
) -> Result<T> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::ParseError(format!("缺少{}", what)))?;
    token.text.parse().map_err(|_| {
        Error::ParseError(format!(
            "第 {} 行: 无法解析{} '{}'",
            token.line, what, token.text
        ))
    })
}

fn parse_count<'a>(tokens: &mut impl Iterator<Item = Token<'a>>, what: &str) -> Result<usize> {
    parse_next(tokens, what)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BiDirAddOutcome;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# 四个城市
4
A B C D
# 边
4
A B 3
B C 4
C D 5
A D 10
";

    #[test]
    fn test_load_directed() {
        let mut graph: Graph<String, i64> = Graph::new();
        let stats = GraphLoader::new(&mut graph).load_str(SAMPLE).unwrap();

        assert_eq!(stats.vertices_imported, 4);
        assert_eq!(stats.edges_imported, 4);
        assert_eq!(stats.errors, 0);
        assert!(graph.is_uni_edge(&"A".to_string(), &"D".to_string()));
        assert!(!graph.is_uni_edge(&"D".to_string(), &"A".to_string()));
    }

    #[test]
    fn test_load_undirected() {
        let mut graph: Graph<String, i64> = Graph::new();
        GraphLoader::new(&mut graph)
            .with_mode(EdgeMode::Undirected)
            .load_str(SAMPLE)
            .unwrap();

        assert_eq!(graph.edge_count(), 8);
        assert!(graph.is_bidir_edge(&"C".to_string(), &"B".to_string()));
    }

    #[test]
    fn test_rejected_entries_are_counted() {
        let text = "3 A B A 4  A B 1  A Z 2  A B 5  Q A 1";
        let mut graph: Graph<String, i32> = Graph::new();
        let stats = GraphLoader::new(&mut graph).load_str(text).unwrap();

        assert_eq!(stats.vertices_imported, 2);
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 4);
        assert_eq!(graph.edge_weight(&"A".to_string(), &"B".to_string()), Some(1));
    }

    #[test]
    fn test_undirected_partial_edge_is_imported() {
        let mut graph: Graph<char, i32> = Graph::new();
        graph.add_vertex('a').unwrap();
        graph.add_vertex('b').unwrap();
        graph.add_uni_edge(&'a', &'b', 1).unwrap();

        let stats = GraphLoader::new(&mut graph)
            .with_mode(EdgeMode::Undirected)
            .load_str("0 2 a b 7 b a 7")
            .unwrap();

        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 1);
        assert_eq!(
            graph.add_bidir_edge(&'a', &'b', 1).unwrap(),
            BiDirAddOutcome::BothExisted
        );
    }

    #[test]
    fn test_parse_errors() {
        let mut graph: Graph<String, i32> = Graph::new();

        let err = GraphLoader::new(&mut graph).load_str("two A B").unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));

        let err = GraphLoader::new(&mut graph)
            .load_str("2 A B 1 A B x")
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(ref m) if m.contains("第 1 行")));

        let err = GraphLoader::new(&mut graph)
            .load_str("1 C 2 C C 1")
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(ref m) if m.contains("缺少")));
    }

    #[test]
    fn test_failed_load_leaves_graph_unchanged() {
        let mut graph: Graph<String, i32> = Graph::new();
        graph.add_vertex("X".to_string()).unwrap();

        let err = GraphLoader::new(&mut graph)
            .load_str("3 A B C 2 A B 1 B C oops")
            .unwrap_err();
        assert!(matches!(err, Error::ParseError(_)));

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_vertex(&"X".to_string()));
        assert!(!graph.is_vertex(&"A".to_string()));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let mut graph: Graph<String, i64> = Graph::new();
        let stats = import_graph_file(&mut graph, file.path(), EdgeMode::Directed).unwrap();

        assert_eq!(stats.edges_imported, 4);
        let path = graph
            .shortest_distance(&"A".to_string(), &"D".to_string())
            .unwrap();
        assert_eq!(path.distance, 10);
    }

    #[test]
    fn test_stats_as_json() {
        let mut graph: Graph<String, i64> = Graph::new();
        let stats = GraphLoader::new(&mut graph).load_str(SAMPLE).unwrap();

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["vertices_imported"], 4);
        assert_eq!(value["edges_imported"], 4);
        assert_eq!(value["errors"], 0);
    }

    #[test]
    fn test_missing_file() {
        let mut graph: Graph<String, i64> = Graph::new();
        let err = import_graph_file(&mut graph, "/nonexistent/graph.txt", EdgeMode::Directed)
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
