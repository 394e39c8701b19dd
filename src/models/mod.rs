//! # 数据模型模块
//!
//! 定义晶格坐标和声子本征矢量相关的数据模型与变换。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 子模块: structure, phonon

pub mod phonon;
pub mod structure;

pub use phonon::eigenvectors_to_eigendisplacements;
pub use structure::{
    cartesian_to_fractional_coordinates, fractional_to_cartesian_coordinates, Lattice,
};
