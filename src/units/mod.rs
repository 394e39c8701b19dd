//! # 频率单位模块
//!
//! 振动频率单位的标签查询与换算。
//!
//! ## 支持单位
//! - `thz`: 太赫兹（基准单位）
//! - `inv_cm`: 波数 cm⁻¹
//! - `mev`: 毫电子伏
//! - `um`: 波长 μm（与频率成反比）
//!
//! ## 换算流程
//! 源单位 -> THz -> 目标单位。`um` 两个方向都使用同一个倒数公式。
//!
//! ## 依赖关系
//! - 被 `peaks/`, `commands/` 使用
//! - 使用 `units/constants.rs`

pub mod constants;

use crate::error::{Result, SpectrutilError};
use constants::*;

use std::fmt;
use std::str::FromStr;

/// 频率单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    Thz,
    InvCm,
    Mev,
    Um,
}

impl FrequencyUnit {
    /// 所有支持的单位
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Thz,
        FrequencyUnit::InvCm,
        FrequencyUnit::Mev,
        FrequencyUnit::Um,
    ];

    /// 小写单位键
    pub fn key(self) -> &'static str {
        match self {
            FrequencyUnit::Thz => "thz",
            FrequencyUnit::InvCm => "inv_cm",
            FrequencyUnit::Mev => "mev",
            FrequencyUnit::Um => "um",
        }
    }

    /// 绘图/表格用标签
    pub fn label(self) -> &'static str {
        match self {
            FrequencyUnit::Thz => LABEL_THZ,
            FrequencyUnit::InvCm => LABEL_INV_CM,
            FrequencyUnit::Mev => LABEL_MEV,
            FrequencyUnit::Um => LABEL_UM,
        }
    }

    /// 换算到 THz
    pub fn to_thz(self, value: f64) -> f64 {
        match self {
            FrequencyUnit::Thz => value,
            FrequencyUnit::InvCm => value / THZ_TO_INV_CM,
            FrequencyUnit::Mev => value / THZ_TO_MEV,
            FrequencyUnit::Um => 1.0 / (value * THZ_TO_INV_UM),
        }
    }

    /// 从 THz 换算到本单位
    pub fn from_thz(self, value: f64) -> f64 {
        match self {
            FrequencyUnit::Thz => value,
            FrequencyUnit::InvCm => value * THZ_TO_INV_CM,
            FrequencyUnit::Mev => value * THZ_TO_MEV,
            FrequencyUnit::Um => 1.0 / (value * THZ_TO_INV_UM),
        }
    }

    /// 单值换算，同单位时原样返回
    pub fn convert(self, value: f64, to: FrequencyUnit) -> f64 {
        if self == to {
            return value;
        }
        to.from_thz(self.to_thz(value))
    }
}

impl FromStr for FrequencyUnit {
    type Err = SpectrutilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "thz" => Ok(FrequencyUnit::Thz),
            "inv_cm" => Ok(FrequencyUnit::InvCm),
            "mev" => Ok(FrequencyUnit::Mev),
            "um" => Ok(FrequencyUnit::Um),
            _ => Err(SpectrutilError::UnsupportedUnit {
                units: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 获取单位标签；不认识的单位原样返回，可直接用于用户输入的坐标轴标签
pub fn frequency_unit_label(units: &str) -> String {
    match units.parse::<FrequencyUnit>() {
        Ok(unit) => unit.label().to_string(),
        Err(_) => units.to_string(),
    }
}

/// 将一组频率从 `units_from` 换算到 `units_to`
///
/// 单位名不区分大小写。两个单位名相同时不做任何运算，直接返回原值。
pub fn convert_frequency_units(
    frequencies: &[f64],
    units_from: &str,
    units_to: &str,
) -> Result<Vec<f64>> {
    if units_from.to_lowercase() == units_to.to_lowercase() {
        return Ok(frequencies.to_vec());
    }

    let from: FrequencyUnit = units_from.parse()?;
    let to: FrequencyUnit = units_to.parse()?;

    Ok(frequencies.iter().map(|&f| from.convert(f, to)).collect())
}
