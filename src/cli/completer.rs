//! 控制台命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    // 基础
    "help", "quit", "exit", "print", "stats", "mode",
    // 顶点
    "add-vertex", "del-vertex", "has-vertex",
    // 边
    "add-edge", "del-edge", "has-edge",
    // 算法
    "bfs", "dfs", "idfs", "path", "ford", "mst",
    // 导入
    "load",
];

/// 命令参数的固定取值
fn get_arguments(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "mode" => Some(&["directed", "undirected"]),
        _ => None,
    }
}

fn to_pairs<'a>(candidates: impl Iterator<Item = &'a &'static str>) -> Vec<Pair> {
    candidates
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// adjgraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 返回替换起点和候选项
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line_to_cursor = &line[..pos];
        let words: Vec<&str> = line_to_cursor.split_whitespace().collect();

        // 光标在空格后：只为第一个词之后的参数提供建议
        if line_to_cursor.ends_with(' ') || words.is_empty() {
            return match words.as_slice() {
                [command] => match get_arguments(&command.to_lowercase()) {
                    Some(args) => (pos, to_pairs(args.iter())),
                    None => (pos, vec![]),
                },
                _ => (pos, vec![]),
            };
        }

        let word = words[words.len() - 1];
        let start_pos = pos - word.len();
        let current = word.to_lowercase();

        match words.len() {
            1 => (
                start_pos,
                to_pairs(COMMANDS.iter().filter(|c| c.starts_with(&current))),
            ),
            2 => match get_arguments(&words[0].to_lowercase()) {
                Some(args) => (
                    start_pos,
                    to_pairs(args.iter().filter(|a| a.starts_with(&current))),
                ),
                None => (start_pos, vec![]),
            },
            _ => (start_pos, vec![]),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
