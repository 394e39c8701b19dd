//! # coords 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/coords.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 目标坐标系
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Fractional coordinates (relative to the lattice vectors)
    Fractional,
    /// Cartesian coordinates
    Cartesian,
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateSystem::Fractional => write!(f, "fractional"),
            CoordinateSystem::Cartesian => write!(f, "cartesian"),
        }
    }
}

/// coords 子命令参数
#[derive(Args, Debug)]
pub struct CoordsArgs {
    /// CSV file with one position (x, y, z) per row, no header
    pub input: PathBuf,

    /// Lattice vectors as rows, e.g. "4 0 0; 0 4 0; 0 0 6"
    #[arg(short, long)]
    pub lattice: String,

    /// Coordinate system to convert to
    #[arg(short, long, value_enum)]
    pub to: CoordinateSystem,

    /// Write the converted positions to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
