//! # 统一错误处理模块
//!
//! 定义 spectrutil 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// spectrutil 统一错误类型
#[derive(Error, Debug)]
pub enum SpectrutilError {
    // ─────────────────────────────────────────────────────────────
    // 单位换算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported units '{units}' (expected one of: thz, inv_cm, mev, um)")]
    UnsupportedUnit { units: String },

    // ─────────────────────────────────────────────────────────────
    // 峰表分组错误
    // ─────────────────────────────────────────────────────────────
    #[error("Inconsistent lengths: {what} has {found} elements, expected {expected}")]
    InconsistentLength {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("Band index {index} assigned to multiple ir. rep. groups")]
    DuplicateBandIndex { index: usize },

    #[error("Band index {index} is out of bounds for # modes = {num_modes}")]
    BandIndexOutOfRange { index: usize, num_modes: usize },

    #[error(
        "Ir. rep. groups reference {covered} distinct band(s), but # modes = {num_modes}"
    )]
    IncompleteBandCoverage { covered: usize, num_modes: usize },

    // ─────────────────────────────────────────────────────────────
    // 坐标变换错误
    // ─────────────────────────────────────────────────────────────
    #[error("Lattice vectors must form a 3x3 matrix, got {rows}x{cols}")]
    InvalidLatticeShape { rows: usize, cols: usize },

    #[error("Lattice vectors are singular and cannot be inverted")]
    SingularLattice,

    #[error("Position {index} must be a three-component vector, got {len} component(s)")]
    InvalidVectorShape { index: usize, len: usize },

    // ─────────────────────────────────────────────────────────────
    // 本征矢量错误
    // ─────────────────────────────────────────────────────────────
    #[error("Eigenvectors should be a 3N x N x 3 array: {reason}")]
    ShapeMismatch { reason: String },

    #[error(
        "{masses} atomic mass(es) supplied, inconsistent with {atoms} displacement(s) per eigenvector"
    )]
    MassCountMismatch { masses: usize, atoms: usize },

    #[error("Atomic mass {mass} for atom {index} must be positive and finite")]
    InvalidMass { index: usize, mass: f64 },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误 (仅命令行使用)
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, SpectrutilError>;
