//! 日志初始化
//!
//! 库本身只产生 tracing 事件，订阅者由二进制程序安装

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志级别的环境变量覆盖
pub const LOG_ENV: &str = "ADJGRAPH_LOG";

/// 根据命令行给出的级别初始化日志，输出到 stderr
///
/// `RUST_LOG` / `ADJGRAPH_LOG` 优先；级别不含 `=` 时只作用于本 crate。
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(directive_for(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("无法初始化日志")?;

    Ok(())
}

fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("adjgraph={}", level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for() {
        assert_eq!(directive_for("debug"), "adjgraph=debug");
        assert_eq!(directive_for("adjgraph=trace,warn"), "adjgraph=trace,warn");
    }

    #[test]
    fn test_init_tracing_only_once() {
        let _ = init_tracing("warn");
        let err = init_tracing("debug").unwrap_err();
        assert!(err.to_string().contains("无法初始化日志"));
    }
}
