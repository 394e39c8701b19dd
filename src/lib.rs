//! # spectrutil - 振动光谱后处理工具库
//!
//! 声子/振动光谱计算后处理中用到的纯函数：
//!
//! ## 模块
//! - `units`  - 频率单位标签与换算 (THz, cm⁻¹, meV, μm)
//! - `peaks`  - 按不可约表示分组合并峰表
//! - `models` - 晶格坐标变换、质量加权本征位移
//! - `error`  - 统一错误类型
//!
//! 所有函数无状态、无 I/O，输入只读，失败时不产生部分结果。
//!
//! ## 依赖关系
//! ```text
//! lib.rs
//!   ├── units/    (单位换算)
//!   ├── peaks/    (峰表分组)
//!   ├── models/   (坐标变换、本征位移)
//!   └── error.rs  (错误处理)
//! ```

pub mod error;
pub mod models;
pub mod peaks;
pub mod units;

pub use error::{Result, SpectrutilError};
pub use models::{
    cartesian_to_fractional_coordinates, eigenvectors_to_eigendisplacements,
    fractional_to_cartesian_coordinates, Lattice,
};
pub use peaks::{group_for_peak_table, GroupedPeaks, IrRepGroup};
pub use units::{convert_frequency_units, frequency_unit_label, FrequencyUnit};
