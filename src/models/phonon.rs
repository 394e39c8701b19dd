//! # 声子本征矢量数据模型
//!
//! 把动力学矩阵的本征矢量转换为质量加权的本征位移：
//! 每个原子的位移分量除以 sqrt(质量)。
//!
//! ## 形状约定
//! N 个原子对应 3N 个模式，每个模式包含 N 个三分量位移向量。
//!
//! ## 依赖关系
//! - 被 `lib.rs` 导出给调用方
//! - 无外部模块依赖

use crate::error::{Result, SpectrutilError};

/// 本征矢量 -> 本征位移
///
/// `eigenvectors` 为 3N x N x 3，`atomic_masses` 为 N 个正的原子质量，
/// 输出形状与输入相同，`out[i][j] = eigenvectors[i][j] / sqrt(mass[j])`。
pub fn eigenvectors_to_eigendisplacements<M, V>(
    eigenvectors: &[M],
    atomic_masses: &[f64],
) -> Result<Vec<Vec<[f64; 3]>>>
where
    M: AsRef<[V]>,
    V: AsRef<[f64]>,
{
    let num_modes = eigenvectors.len();
    let num_atoms = eigenvectors.first().map(|m| m.as_ref().len()).unwrap_or(0);

    if num_modes != 3 * num_atoms {
        return Err(SpectrutilError::ShapeMismatch {
            reason: format!("{} mode(s) supplied for {} atom(s)", num_modes, num_atoms),
        });
    }

    for (i, mode) in eigenvectors.iter().enumerate() {
        let mode = mode.as_ref();
        if mode.len() != num_atoms {
            return Err(SpectrutilError::ShapeMismatch {
                reason: format!(
                    "mode {} has {} displacement(s), expected {}",
                    i + 1,
                    mode.len(),
                    num_atoms
                ),
            });
        }

        if let Some((j, v)) = mode.iter().enumerate().find(|(_, v)| v.as_ref().len() != 3) {
            return Err(SpectrutilError::ShapeMismatch {
                reason: format!(
                    "displacement {} of mode {} has {} component(s)",
                    j + 1,
                    i + 1,
                    v.as_ref().len()
                ),
            });
        }
    }

    if atomic_masses.len() != num_atoms {
        return Err(SpectrutilError::MassCountMismatch {
            masses: atomic_masses.len(),
            atoms: num_atoms,
        });
    }

    if let Some((index, &mass)) = atomic_masses
        .iter()
        .enumerate()
        .find(|(_, m)| !(m.is_finite() && **m > 0.0))
    {
        return Err(SpectrutilError::InvalidMass { index, mass });
    }

    let sqrt_masses: Vec<f64> = atomic_masses.iter().map(|m| m.sqrt()).collect();

    let eigendisplacements: Vec<Vec<[f64; 3]>> = eigenvectors
        .iter()
        .map(|mode| {
            mode.as_ref()
                .iter()
                .zip(&sqrt_masses)
                .map(|(v, sqrt_mass)| {
                    let v = v.as_ref();
                    [v[0] / sqrt_mass, v[1] / sqrt_mass, v[2] / sqrt_mass]
                })
                .collect()
        })
        .collect();

    Ok(eigendisplacements)
}
