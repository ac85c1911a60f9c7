//! adjgraph 数据导入工具
//!
//! 从文本文件导入图并输出统计信息

use adjgraph::cli::CliGraph;
use adjgraph::import::GraphLoader;
use adjgraph::logging::init_tracing;
use adjgraph::EdgeMode;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "adjgraph-import")]
#[command(about = "adjgraph 数据导入工具")]
struct Args {
    /// 输入文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 使用无向模式（双向边）
    #[arg(short, long)]
    undirected: bool,

    /// 导入后打印邻接表
    #[arg(short, long)]
    print: bool,

    /// 以 JSON 输出统计信息
    #[arg(long)]
    json: bool,

    /// 日志级别
    #[arg(long, default_value = "warn")]
    log_level: String,
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
    let stats = GraphLoader::new(&mut graph)
        .with_mode(mode)
        .load_file(&args.input)
        .with_context(|| format!("无法导入 {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("adjgraph 数据导入工具");
        println!("========================");
        println!("输入文件: {:?}", args.input);
        println!("模式: {}", mode);
        println!("\n导入完成!");
        println!("  顶点导入: {}", stats.vertices_imported);
        println!("  边导入: {}", stats.edges_imported);
        println!("  错误数: {}", stats.errors);
        println!("  耗时: {} ms", stats.duration_ms);
        println!("\n当前图大小:");
        println!("  顶点数: {}", graph.vertex_count());
        println!("  边数: {}", graph.edge_count());
    }

    if args.print {
        print!("{}", graph);
    }

    Ok(())
}
