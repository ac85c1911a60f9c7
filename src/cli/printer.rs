//! 结果打印器
//!
//! 提供表格和垂直格式的结果输出

use crate::algorithm::{FordReport, MstReport};
use crate::types::{EdgeMode, Label, Weight};
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式 (\G)
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印行列结果
    pub fn print_result(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        if columns.is_empty() || rows.is_empty() {
            return "Empty set\n".to_string();
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(columns, rows),
            PrintMode::Vertical => self.format_vertical(columns, rows),
        };

        format!("{}{} row(s) in set\n", output, rows.len())
    }

    /// 打印 Bellman-Ford 结果：逐轮松弛记录 + 距离表
    pub fn print_ford<V: Label, W: Weight>(&self, report: &FordReport<V, W>) -> String {
        let mut output = String::new();
        for pass in &report.passes {
            let updated: Vec<String> = pass.updated.iter().map(|v| v.to_string()).collect();
            output.push_str(&format!(
                "Pass {:>2}: {}\n",
                pass.pass,
                if updated.is_empty() {
                    "no change".to_string()
                } else {
                    updated.join(" ")
                }
            ));
        }

        let rows: Vec<Vec<String>> = report
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.vertex.to_string(),
                    e.distance.to_string(),
                    e.predecessor.to_string(),
                ]
            })
            .collect();
        output.push_str(&self.print_result(&["Vertex", "Distance", "Predecessor"], &rows));
        output
    }

    /// 打印最小生成树的边和总权重
    pub fn print_mst<V: Label, W: Weight>(&self, report: &MstReport<V, W>) -> String {
        let rows: Vec<Vec<String>> = report
            .edges
            .iter()
            .map(|e| vec![e.from.to_string(), e.to.to_string(), e.weight.to_string()])
            .collect();

        let mut output = match &report.root {
            Some(root) => format!("MST rooted at {}\n", root),
            None => String::new(),
        };
        output.push_str(&self.print_result(&["From", "To", "Weight"], &rows));
        output.push_str(&format!("Total weight: {}\n", report.total_weight));
        output
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize, mode: EdgeMode) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Mode", mode.as_str()]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   adjgraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?                 显示帮助
  quit, exit, q              退出程序
  print, p                   按邻接表打印图
  stats, info                显示图统计信息
  mode [directed|undirected] 查看或切换边模式

顶点:
  add-vertex <v>             添加顶点
  del-vertex <v>             删除顶点（同时删除指向它的边）
  has-vertex <v>             判断顶点是否存在

边（有向模式为单向边，无向模式为双向边）:
  add-edge <a> <b> <w>       添加边
  del-edge <a> <b>           删除边
  has-edge <a> <b>           判断边是否存在

算法:
  bfs <v>                    广度优先遍历
  dfs <v>                    递归深度优先遍历
  idfs <v>                   迭代深度优先遍历
  path <a> <b>               Dijkstra 最短路径
  ford <v>                   Bellman-Ford 单源最短路径
  mst [v]                    Prim 最小生成树（无向图）

导入:
  load <file>                从文本文件导入，替换当前图

提示: 在 ford / mst 命令末尾加 \G 可垂直显示结果

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 检查命令是否以 \G 结尾（垂直显示）
pub fn check_vertical_display(input: &str) -> (String, bool) {
    let trimmed = input.trim();
    if trimmed.ends_with("\\G") || trimmed.ends_with("\\g") {
        let clean = trimmed[..trimmed.len() - 2].trim().to_string();
        (clean, true)
    } else {
        (trimmed.to_string(), false)
    }
}
