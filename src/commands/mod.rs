//! # 命令执行模块
//!
//! 实现各子命令：读取输入、调用核心库、输出结果。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `export`, `utils/` 以及核心库
//! - 子模块: units, peaks, coords

pub mod coords;
pub mod peaks;
pub mod units;

use crate::cli::Commands;
use spectrutil::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Units(args) => units::execute(args),
        Commands::Peaks(args) => peaks::execute(args),
        Commands::Coords(args) => coords::execute(args),
    }
}
