//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `units`: 频率单位换算
//! - `peaks`: 按 ir. rep. 分组生成峰表
//! - `coords`: 笛卡尔/分数坐标转换
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: units, peaks, coords

pub mod coords;
pub mod peaks;
pub mod units;

use clap::{Parser, Subcommand};

/// spectrutil - 振动光谱后处理工具
#[derive(Parser)]
#[command(name = "spectrutil")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Post-processing utilities for vibrational spectroscopy calculations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert frequencies between THz, cm⁻¹, meV and μm
    Units(units::UnitsArgs),

    /// Group modes by ir. rep. into a peak table
    Peaks(peaks::PeaksArgs),

    /// Convert positions between cartesian and fractional coordinates
    Coords(coords::CoordsArgs),
}
