//! 交互式命令行支持
//!
//! 命令解析、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, CliGraph, CommandResult, Session};
pub use completer::CommandCompleter;
pub use printer::{PrintMode, Printer};
