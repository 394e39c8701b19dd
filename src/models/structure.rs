//! # 晶格与坐标变换
//!
//! 晶格矩阵表示，以及笛卡尔坐标与分数坐标之间的互相转换。
//!
//! ## 约定
//! 晶格矩阵按行存放晶格向量 a, b, c；坐标按行向量处理：
//! - 分数 -> 笛卡尔: r = f1·a + f2·b + f3·c
//! - 笛卡尔 -> 分数: f = r · L⁻¹
//!
//! ## 依赖关系
//! - 被 `commands/coords.rs` 使用
//! - 使用 `nalgebra` 求逆矩阵

use crate::error::{Result, SpectrutilError};

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// 晶格参数表示
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建晶格
    /// 角度单位：度
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let cos_alpha = alpha.to_radians().cos();
        let cos_beta = beta.to_radians().cos();
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        Lattice {
            matrix: [
                [a, 0.0, 0.0],
                [b * cos_gamma, b * sin_gamma, 0.0],
                [c1, c2, c3],
            ],
        }
    }

    /// 从任意行集合创建，要求恰好 3 行 3 列
    pub fn try_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        if rows.len() != 3 || rows.iter().any(|r| r.as_ref().len() != 3) {
            let bad_cols = rows
                .iter()
                .map(|r| r.as_ref().len())
                .find(|&len| len != 3)
                .unwrap_or(cols);
            return Err(SpectrutilError::InvalidLatticeShape {
                rows: rows.len(),
                cols: bad_cols,
            });
        }

        let mut matrix = [[0.0; 3]; 3];
        for (target, row) in matrix.iter_mut().zip(rows) {
            target.copy_from_slice(row.as_ref());
        }

        Ok(Lattice { matrix })
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let [a_vec, b_vec, c_vec] = self.matrix;

        let a = norm(&a_vec);
        let b = norm(&b_vec);
        let c = norm(&c_vec);

        let alpha = (dot(&b_vec, &c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(&a_vec, &c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(&a_vec, &b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积（带符号的行列式）
    pub fn volume(&self) -> f64 {
        self.as_matrix3().determinant()
    }

    /// 笛卡尔坐标 -> 分数坐标
    pub fn to_fractional(&self, position: [f64; 3]) -> Result<[f64; 3]> {
        let inverse = self.inverse()?;
        Ok(row_times_matrix(&position, &inverse))
    }

    /// 分数坐标 -> 笛卡尔坐标
    pub fn to_cartesian(&self, fractional: [f64; 3]) -> [f64; 3] {
        row_times_matrix(&fractional, &self.matrix)
    }

    /// 晶格矩阵的逆
    pub fn inverse(&self) -> Result<[[f64; 3]; 3]> {
        let m = self.as_matrix3();

        let det = m.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(SpectrutilError::SingularLattice);
        }

        let inv = m.try_inverse().ok_or(SpectrutilError::SingularLattice)?;
        if inv.iter().any(|x| !x.is_finite()) {
            return Err(SpectrutilError::SingularLattice);
        }

        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = inv[(i, j)];
            }
        }
        Ok(out)
    }

    fn as_matrix3(&self) -> Matrix3<f64> {
        let m = self.matrix;
        Matrix3::new(
            m[0][0], m[0][1], m[0][2], //
            m[1][0], m[1][1], m[1][2], //
            m[2][0], m[2][1], m[2][2],
        )
    }
}

/// 批量转换笛卡尔坐标为分数坐标
///
/// `lattice_vectors` 必须是 3x3（行为晶格向量），否则返回 `InvalidLatticeShape`；
/// 晶格不可逆时返回 `SingularLattice`。
pub fn cartesian_to_fractional_coordinates<P, R>(
    positions: &[P],
    lattice_vectors: &[R],
) -> Result<Vec<[f64; 3]>>
where
    P: AsRef<[f64]>,
    R: AsRef<[f64]>,
{
    let lattice = Lattice::try_from_rows(lattice_vectors)?;
    let inverse = lattice.inverse()?;

    positions
        .iter()
        .enumerate()
        .map(|(index, p)| -> Result<[f64; 3]> {
            let position = as_vector3(index, p.as_ref())?;
            Ok(row_times_matrix(&position, &inverse))
        })
        .collect()
}

/// 批量转换分数坐标为笛卡尔坐标
pub fn fractional_to_cartesian_coordinates<P, R>(
    positions: &[P],
    lattice_vectors: &[R],
) -> Result<Vec<[f64; 3]>>
where
    P: AsRef<[f64]>,
    R: AsRef<[f64]>,
{
    let lattice = Lattice::try_from_rows(lattice_vectors)?;

    positions
        .iter()
        .enumerate()
        .map(|(index, p)| -> Result<[f64; 3]> {
            Ok(lattice.to_cartesian(as_vector3(index, p.as_ref())?))
        })
        .collect()
}

fn as_vector3(index: usize, v: &[f64]) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(v).map_err(|_| SpectrutilError::InvalidVectorShape {
        index,
        len: v.len(),
    })
}

/// 行向量右乘矩阵: v · M
fn row_times_matrix(v: &[f64; 3], m: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        v[0] * m[0][0] + v[1] * m[1][0] + v[2] * m[2][0],
        v[0] * m[0][1] + v[1] * m[1][1] + v[2] * m[2][1],
        v[0] * m[0][2] + v[1] * m[1][2] + v[2] * m[2][2],
    ]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
