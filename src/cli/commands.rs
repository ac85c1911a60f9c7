//! 控制台命令处理
//!
//! 把一行输入解析成图操作，并把操作结果翻译成文本

use super::printer::{check_vertical_display, PrintMode, Printer};
use crate::graph::Graph;
use crate::import::import_graph_file;
use crate::types::{BiDirAddOutcome, BiDirDeleteOutcome, EdgeMode};

/// CLI 使用的图：字符串顶点、整数权重
pub type CliGraph = Graph<String, i64>;

/// 控制台命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台会话状态
pub struct Session {
    /// 当前图
    pub graph: CliGraph,
    /// 边模式
    pub mode: EdgeMode,
    printer: Printer,
}

impl Session {
    pub fn new(mode: EdgeMode) -> Self {
        Self::with_graph(CliGraph::new(), mode)
    }

    pub fn with_graph(graph: CliGraph, mode: EdgeMode) -> Self {
        Self {
            graph,
            mode,
            printer: Printer::default(),
        }
    }
}

/// 解析并执行一条命令
pub fn execute_command(session: &mut Session, input: &str) -> CommandResult {
    let (line, vertical) = check_vertical_display(input);
    session.printer.set_mode(if vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    });

    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        return CommandResult::Continue;
    };

    match cmd.to_lowercase().as_str() {
        "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "print" | "p" => {
            if session.graph.is_empty() {
                CommandResult::Message("(empty graph)".to_string())
            } else {
                CommandResult::Message(session.graph.to_string())
            }
        }

        "stats" | "info" => CommandResult::Message(session.printer.print_stats(
            session.graph.vertex_count(),
            session.graph.edge_count(),
            session.mode,
        )),

        "mode" => match args.first().map(|s| s.to_lowercase()).as_deref() {
            None => CommandResult::Message(format!("Current mode: {}", session.mode)),
            Some("directed" | "d") => {
                session.mode = EdgeMode::Directed;
                CommandResult::Message("Mode set to directed".to_string())
            }
            Some("undirected" | "u") => {
                session.mode = EdgeMode::Undirected;
                CommandResult::Message("Mode set to undirected".to_string())
            }
            Some(_) => usage("mode [directed|undirected]"),
        },

        "add-vertex" | "av" => match args {
            [v] => report(session.graph.add_vertex(v.to_string()), "Added."),
            _ => usage("add-vertex <v>"),
        },

        "del-vertex" | "dv" => match args {
            [v] => report(session.graph.delete_vertex(&v.to_string()), "Deleted."),
            _ => usage("del-vertex <v>"),
        },

        "has-vertex" | "hv" => match args {
            [v] => CommandResult::Message(if session.graph.is_vertex(&v.to_string()) {
                format!("Vertex {} is in the graph.", v)
            } else {
                format!("Vertex {} is NOT in the graph.", v)
            }),
            _ => usage("has-vertex <v>"),
        },

        "add-edge" | "ae" => match args {
            [a, b, w] => match w.parse::<i64>() {
                Ok(weight) => add_edge(session, a, b, weight),
                Err(_) => CommandResult::Error(format!("无效的权重: {}", w)),
            },
            _ => usage("add-edge <a> <b> <weight>"),
        },

        "del-edge" | "de" => match args {
            [a, b] => delete_edge(session, a, b),
            _ => usage("del-edge <a> <b>"),
        },

        "has-edge" | "he" => match args {
            [a, b] => {
                let (a, b) = (a.to_string(), b.to_string());
                let (present, text) = match session.mode {
                    EdgeMode::Directed => {
                        (session.graph.is_uni_edge(&a, &b), format!("<{},{}>", a, b))
                    }
                    EdgeMode::Undirected => {
                        (session.graph.is_bidir_edge(&a, &b), format!("({},{})", a, b))
                    }
                };
                CommandResult::Message(if present {
                    format!("Edge {} is in the graph.", text)
                } else {
                    format!("Edge {} is NOT in the graph.", text)
                })
            }
            _ => usage("has-edge <a> <b>"),
        },

        "bfs" | "dfs" | "idfs" => match args {
            [v] => {
                let start = v.to_string();
                let result = match cmd.to_lowercase().as_str() {
                    "bfs" => session.graph.breadth_first(&start),
                    "dfs" => session.graph.depth_first_recursive(&start),
                    _ => session.graph.depth_first_iterative(&start),
                };
                match result {
                    Ok(order) => CommandResult::Message(order.join(" ")),
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            _ => usage("bfs|dfs|idfs <v>"),
        },

        "path" | "shortest" => match args {
            [a, b] => match session.graph.shortest_distance(&a.to_string(), &b.to_string()) {
                Ok(path) => CommandResult::Message(format!(
                    "Shortest distance from {} to {} is: {}\nPath: {}",
                    a,
                    b,
                    path.distance,
                    path.path.join(" -> ")
                )),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            _ => usage("path <a> <b>"),
        },

        "ford" => match args {
            [v] => match session.graph.ford_shortest_paths(&v.to_string()) {
                Ok(report) => CommandResult::Message(session.printer.print_ford(&report)),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            _ => usage("ford <v>"),
        },

        "mst" => {
            let result = match args {
                [] => session.graph.minimum_spanning_tree(),
                [v] => session.graph.minimum_spanning_tree_from(&v.to_string()),
                _ => return usage("mst [v]"),
            };
            match result {
                Ok(report) => CommandResult::Message(session.printer.print_mst(&report)),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }

        "load" | "import" => match args {
            [path] => {
                let mut graph = CliGraph::new();
                match import_graph_file(&mut graph, path, session.mode) {
                    Ok(stats) => {
                        session.graph = graph;
                        CommandResult::Message(format!(
                            "Graph loaded: {} vertices, {} edges, {} rejected",
                            stats.vertices_imported, stats.edges_imported, stats.errors
                        ))
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                }
            }
            _ => usage("load <file>"),
        },

        _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
    }
}

fn add_edge(session: &mut Session, a: &str, b: &str, weight: i64) -> CommandResult {
    let (v1, v2) = (a.to_string(), b.to_string());
    match session.mode {
        EdgeMode::Directed => report(session.graph.add_uni_edge(&v1, &v2, weight), "Added."),
        EdgeMode::Undirected => match session.graph.add_bidir_edge(&v1, &v2, weight) {
            Ok(BiDirAddOutcome::BothAdded) => CommandResult::Message("Added.".to_string()),
            Ok(BiDirAddOutcome::ForwardExisted) => CommandResult::Message(format!(
                "Edge <{a},{b}> already exists, edge <{b},{a}> added."
            )),
            Ok(BiDirAddOutcome::BackwardExisted) => CommandResult::Message(format!(
                "Edge <{b},{a}> already exists, edge <{a},{b}> added."
            )),
            Ok(BiDirAddOutcome::BothExisted) => {
                CommandResult::Error(format!("Can't add: edge ({a},{b}) already exists."))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },
    }
}

fn delete_edge(session: &mut Session, a: &str, b: &str) -> CommandResult {
    let (v1, v2) = (a.to_string(), b.to_string());
    match session.mode {
        EdgeMode::Directed => report(session.graph.delete_uni_edge(&v1, &v2), "Deleted."),
        EdgeMode::Undirected => match session.graph.delete_bidir_edge(&v1, &v2) {
            Ok(BiDirDeleteOutcome::BothDeleted) => CommandResult::Message("Deleted.".to_string()),
            Ok(BiDirDeleteOutcome::OnlyForwardDeleted) => CommandResult::Message(format!(
                "Edge <{a},{b}> deleted, edge <{b},{a}> is NOT in the graph."
            )),
            Ok(BiDirDeleteOutcome::OnlyBackwardDeleted) => CommandResult::Message(format!(
                "Edge <{b},{a}> deleted, edge <{a},{b}> is NOT in the graph."
            )),
            Ok(BiDirDeleteOutcome::NeitherExisted) => {
                CommandResult::Error(format!("Can't delete: edge ({a},{b}) is NOT in the graph."))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        },
    }
}

fn report(result: crate::Result<()>, success: &str) -> CommandResult {
    match result {
        Ok(()) => CommandResult::Message(success.to_string()),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn usage(text: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", text))
}
