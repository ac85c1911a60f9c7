//! adjgraph CLI 工具
//!
//! 交互式命令行界面

use adjgraph::cli::{execute_command, CliGraph, CommandCompleter, CommandResult, Session};
use adjgraph::import::import_graph_file;
use adjgraph::logging::init_tracing;
use adjgraph::EdgeMode;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-cli")]
#[command(about = "adjgraph 命令行工具")]
struct Args {
    /// 启动时导入的图文件
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 使用无向模式（双向边）
    #[arg(short, long)]
    undirected: bool,

    /// 执行单条命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 日志级别
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 不读写历史文件
    #[arg(long)]
    no_history: bool,
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".adjgraph_history"))
}

/// 输出命令结果，返回是否退出
fn handle_result(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            println!("{}", msg.trim_end());
            false
        }
        CommandResult::Error(err) => {
            eprintln!("{} {}", "错误:".red().bold(), err.red());
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mode = if args.undirected {
        EdgeMode::Undirected
    } else {
        EdgeMode::Directed
    };

    let mut graph = CliGraph::new();
    if let Some(input) = &args.input {
        let stats = import_graph_file(&mut graph, input, mode)
            .with_context(|| format!("无法导入 {}", input.display()))?;
        if args.execute.is_none() {
            println!(
                "已导入 {}: {} 个顶点, {} 条边",
                input.display(),
                stats.vertices_imported,
                stats.edges_imported
            );
        }
    }
    let mut session = Session::with_graph(graph, mode);

    // 单条命令模式
    if let Some(command) = args.execute {
        return match execute_command(&mut session, &command) {
            CommandResult::Error(err) => {
                eprintln!("{} {}", "错误:".red().bold(), err.red());
                std::process::exit(1);
            }
            result => {
                handle_result(result);
                Ok(())
            }
        };
    }

    // 交互模式
    println!("{}", format!("adjgraph CLI v{}", adjgraph::VERSION).bold());
    println!("模式: {}。输入 'help' 查看命令列表，'quit' 退出\n", mode);

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));

    let history = if args.no_history { None } else { history_path() };
    if let Some(path) = &history {
        if path.exists() {
            let _ = rl.load_history(path);
        }
    }

    loop {
        let prompt = format!("adjgraph({})> ", session.mode);
        match rl.readline(&prompt) {
            Ok(line) => {
                if handle_result(execute_command(&mut session, &line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(Ctrl+C) 输入 'quit' 退出");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {}", "错误:".red().bold(), err);
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(error = %e, "无法保存历史记录");
        }
    }

    println!("再见！");
    Ok(())
}
