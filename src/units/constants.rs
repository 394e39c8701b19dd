//! # 频率单位换算常数
//!
//! 所有换算以 THz 为基准单位。
//!
//! ## 依赖关系
//! - 被 `units/mod.rs` 使用
//! - 无外部模块依赖

/// 1 THz 对应的波数 (cm⁻¹)
pub const THZ_TO_INV_CM: f64 = 33.35641;

/// 1 THz 对应的能量 (meV)
pub const THZ_TO_MEV: f64 = 4.13567;

/// 1 THz 对应的波数 (μm⁻¹)，波长 λ(μm) = 1 / (ν(THz) × THZ_TO_INV_UM)
pub const THZ_TO_INV_UM: f64 = THZ_TO_INV_CM / 1.0e4;

// 绘图/输出用单位标签
pub const LABEL_THZ: &str = "THz";
pub const LABEL_INV_CM: &str = "cm⁻¹";
pub const LABEL_MEV: &str = "meV";
pub const LABEL_UM: &str = "μm";
