//! # peaks 子命令 CLI 定义
//!
//! 读取逐模式的频率/强度表，按 ir. rep. 分组输出峰表。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/peaks.rs`

use clap::Args;
use std::path::PathBuf;

/// peaks 子命令参数
#[derive(Args, Debug)]
pub struct PeaksArgs {
    /// CSV file with columns: frequency, intensity[, linewidth][, irrep]
    pub input: PathBuf,

    /// Ir. rep. groups, e.g. "Eu:1,2;A2u:3;Eg:4-5" (default: runs of the 'irrep' column)
    #[arg(short, long)]
    pub irreps: Option<String>,

    /// Units of the frequencies in the input file
    #[arg(long, default_value = "thz")]
    pub input_units: String,

    /// Units for the peak table
    #[arg(short, long, env = "SPECTRUTIL_UNITS", default_value = "inv_cm")]
    pub units: String,

    /// Write the grouped peak table to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
