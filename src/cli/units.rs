//! # units 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/units.rs`

use clap::Args;

/// units 子命令参数
#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Frequency values to convert
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Source units (thz, inv_cm, mev, um)
    #[arg(short, long, default_value = "thz")]
    pub from: String,

    /// Target units (thz, inv_cm, mev, um)
    #[arg(short, long, env = "SPECTRUTIL_UNITS", default_value = "inv_cm")]
    pub to: String,
}
