//! # 峰表分组模块
//!
//! 按不可约表示 (ir. rep.) 把振动模式分组，合并为峰表中的一行。
//!
//! ## 算法概述
//! 1. 校验：长度一致、无重复指标、指标在 [1, N] 内、覆盖全部模式
//! 2. 归约：单模式组直接取值；多模式组频率/线宽取平均，强度求和
//!
//! 校验与归约分两遍完成，校验失败时不会产生任何部分结果。
//!
//! ## 依赖关系
//! - 被 `commands/peaks.rs` 使用
//! - 子模块: notation (分组文本解析)

pub mod notation;

pub use notation::parse_ir_rep_groups;

use crate::error::{Result, SpectrutilError};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 一个不可约表示分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrRepGroup {
    /// 不可约表示符号，如 "Eu", "A1g"
    pub symbol: String,

    /// 属于该分组的模式指标（从 1 开始）
    pub band_indices: Vec<usize>,
}

impl IrRepGroup {
    pub fn new(symbol: impl Into<String>, band_indices: Vec<usize>) -> Self {
        IrRepGroup {
            symbol: symbol.into(),
            band_indices,
        }
    }

    /// 从逐模式的标签列表构造分组
    ///
    /// 相邻且相同的标签归为一组（简并模式），例如
    /// `["Eu", "Eu", "A2u", "Eu"]` -> `Eu:[1,2]`, `A2u:[3]`, `Eu:[4]`
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Vec<IrRepGroup> {
        let mut groups: Vec<IrRepGroup> = Vec::new();

        for (i, label) in labels.iter().enumerate() {
            let label = label.as_ref().trim();
            match groups.last_mut() {
                Some(last) if last.symbol == label => last.band_indices.push(i + 1),
                _ => groups.push(IrRepGroup::new(label, vec![i + 1])),
            }
        }

        groups
    }
}

/// 分组后的峰表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedPeaks {
    pub frequencies: Vec<f64>,
    pub intensities: Vec<f64>,
    pub symbols: Vec<String>,
    pub linewidths: Option<Vec<f64>>,
}

impl GroupedPeaks {
    /// 分组数
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// 通过校验的分组（0 起始指标）
struct ValidatedPartition {
    groups: Vec<Vec<usize>>,
}

/// 按 ir. rep. 分组合并频率、强度和（可选的）线宽
///
/// 单模式组原样保留；多模式组的频率和线宽取算术平均，强度求和（重叠的峰强度相加）。
/// 输出顺序与 `ir_rep_data` 一致。
pub fn group_for_peak_table(
    frequencies: &[f64],
    intensities: &[f64],
    ir_rep_data: &[IrRepGroup],
    linewidths: Option<&[f64]>,
) -> Result<GroupedPeaks> {
    let partition = validate_partition(frequencies, intensities, ir_rep_data, linewidths)?;

    let mut frequencies_new = Vec::with_capacity(partition.groups.len());
    let mut intensities_new = Vec::with_capacity(partition.groups.len());
    let mut linewidths_new = linewidths.map(|_| Vec::with_capacity(partition.groups.len()));

    for indices in &partition.groups {
        frequencies_new.push(average(frequencies, indices));
        intensities_new.push(sum(intensities, indices));

        if let (Some(source), Some(target)) = (linewidths, linewidths_new.as_mut()) {
            target.push(average(source, indices));
        }
    }

    Ok(GroupedPeaks {
        frequencies: frequencies_new,
        intensities: intensities_new,
        symbols: ir_rep_data.iter().map(|g| g.symbol.clone()).collect(),
        linewidths: linewidths_new,
    })
}

/// 校验分组是否恰好划分 {1..N}
fn validate_partition(
    frequencies: &[f64],
    intensities: &[f64],
    ir_rep_data: &[IrRepGroup],
    linewidths: Option<&[f64]>,
) -> Result<ValidatedPartition> {
    let num_modes = frequencies.len();

    if intensities.len() != num_modes {
        return Err(SpectrutilError::InconsistentLength {
            what: "intensities".to_string(),
            expected: num_modes,
            found: intensities.len(),
        });
    }

    if let Some(linewidths) = linewidths {
        if linewidths.len() != num_modes {
            return Err(SpectrutilError::InconsistentLength {
                what: "linewidths".to_string(),
                expected: num_modes,
                found: linewidths.len(),
            });
        }
    }

    let mut included: HashSet<usize> = HashSet::with_capacity(num_modes);
    let mut groups = Vec::with_capacity(ir_rep_data.len());

    for group in ir_rep_data {
        let mut indices = Vec::with_capacity(group.band_indices.len());

        for &index in &group.band_indices {
            if included.contains(&index) {
                return Err(SpectrutilError::DuplicateBandIndex { index });
            }

            if index == 0 || index > num_modes {
                return Err(SpectrutilError::BandIndexOutOfRange { index, num_modes });
            }

            included.insert(index);
            indices.push(index - 1);
        }

        groups.push(indices);
    }

    // 重复已被拒绝，这里只可能是覆盖不足
    if included.len() != num_modes {
        return Err(SpectrutilError::IncompleteBandCoverage {
            covered: included.len(),
            num_modes,
        });
    }

    Ok(ValidatedPartition { groups })
}

/// 单元素直接取值，否则取平均（空组为 NaN）
fn average(values: &[f64], indices: &[usize]) -> f64 {
    match indices {
        [single] => values[*single],
        _ => sum(values, indices) / indices.len() as f64,
    }
}

fn sum(values: &[f64], indices: &[usize]) -> f64 {
    match indices {
        [single] => values[*single],
        _ => indices.iter().map(|&i| values[i]).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_abc() -> Vec<IrRepGroup> {
        vec![
            IrRepGroup::new("A", vec![1]),
            IrRepGroup::new("B", vec![2, 3]),
            IrRepGroup::new("C", vec![4]),
        ]
    }

    #[test]
    fn test_group_reduction() {
        let frequencies = [1.5, 3.0, 3.2, 7.25];
        let intensities = [1.0, 2.0, 3.0, 4.0];

        let grouped = group_for_peak_table(&frequencies, &intensities, &groups_abc(), None).unwrap();

        assert_eq!(grouped.symbols, vec!["A", "B", "C"]);
        assert_eq!(grouped.intensities, vec![1.0, 5.0, 4.0]);
        assert_eq!(grouped.frequencies[0], 1.5);
        assert!((grouped.frequencies[1] - 3.1).abs() < 1e-12);
        assert_eq!(grouped.frequencies[2], 7.25);
        assert!(grouped.linewidths.is_none());
    }

    #[test]
    fn test_group_with_linewidths() {
        let frequencies = [1.0, 2.0, 4.0, 8.0];
        let intensities = [1.0, 1.0, 1.0, 1.0];
        let linewidths = [0.1, 0.2, 0.4, 0.8];

        let grouped =
            group_for_peak_table(&frequencies, &intensities, &groups_abc(), Some(&linewidths[..]))
                .unwrap();

        let lw = grouped.linewidths.unwrap();
        assert_eq!(lw.len(), 3);
        assert_eq!(lw[0], 0.1);
        assert!((lw[1] - 0.3).abs() < 1e-12);
        assert_eq!(lw[2], 0.8);
    }

    #[test]
    fn test_output_follows_group_order() {
        let frequencies = [1.0, 2.0, 3.0];
        let intensities = [10.0, 20.0, 30.0];
        let groups = vec![
            IrRepGroup::new("T", vec![3]),
            IrRepGroup::new("E", vec![2, 1]),
        ];

        let grouped = group_for_peak_table(&frequencies, &intensities, &groups, None).unwrap();
        assert_eq!(grouped.symbols, vec!["T", "E"]);
        assert_eq!(grouped.frequencies, vec![3.0, 1.5]);
        assert_eq!(grouped.intensities, vec![30.0, 30.0]);
    }

    #[test]
    fn test_inputs_not_modified() {
        let frequencies = vec![1.0, 2.0];
        let intensities = vec![3.0, 4.0];
        let groups = vec![IrRepGroup::new("E", vec![1, 2])];

        let _ = group_for_peak_table(&frequencies, &intensities, &groups, None).unwrap();
        assert_eq!(frequencies, vec![1.0, 2.0]);
        assert_eq!(intensities, vec![3.0, 4.0]);
    }

    #[test]
    fn test_inconsistent_intensities() {
        let err = group_for_peak_table(&[1.0, 2.0], &[1.0], &[], None).unwrap_err();
        assert!(matches!(
            err,
            SpectrutilError::InconsistentLength {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_inconsistent_linewidths() {
        let groups = vec![IrRepGroup::new("E", vec![1, 2])];
        let err = group_for_peak_table(&[1.0, 2.0], &[1.0, 1.0], &groups, Some(&[0.1][..]))
            .unwrap_err();
        assert!(matches!(err, SpectrutilError::InconsistentLength { ref what, .. } if what == "linewidths"));
    }

    #[test]
    fn test_incomplete_coverage() {
        let groups = vec![IrRepGroup::new("E", vec![1, 2])];
        let err = group_for_peak_table(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], &groups, None)
            .unwrap_err();
        assert!(matches!(
            err,
            SpectrutilError::IncompleteBandCoverage {
                covered: 2,
                num_modes: 3
            }
        ));
    }

    #[test]
    fn test_duplicate_before_coverage() {
        let groups = vec![
            IrRepGroup::new("A", vec![1]),
            IrRepGroup::new("B", vec![1, 2]),
        ];
        let err = group_for_peak_table(&[1.0, 2.0, 3.0], &[1.0, 1.0, 1.0], &groups, None)
            .unwrap_err();
        assert!(matches!(err, SpectrutilError::DuplicateBandIndex { index: 1 }));
    }

    #[test]
    fn test_duplicate_within_group() {
        let groups = vec![IrRepGroup::new("E", vec![2, 2])];
        let err = group_for_peak_table(&[1.0, 2.0], &[1.0, 1.0], &groups, None).unwrap_err();
        assert!(matches!(err, SpectrutilError::DuplicateBandIndex { index: 2 }));
    }

    #[test]
    fn test_index_out_of_range() {
        let groups = vec![IrRepGroup::new("A", vec![0, 1])];
        let err = group_for_peak_table(&[1.0], &[1.0], &groups, None).unwrap_err();
        assert!(matches!(
            err,
            SpectrutilError::BandIndexOutOfRange {
                index: 0,
                num_modes: 1
            }
        ));

        let groups = vec![IrRepGroup::new("A", vec![1, 3])];
        let err = group_for_peak_table(&[1.0, 2.0], &[1.0, 1.0], &groups, None).unwrap_err();
        assert!(matches!(
            err,
            SpectrutilError::BandIndexOutOfRange {
                index: 3,
                num_modes: 2
            }
        ));
    }

    #[test]
    fn test_empty_group_reduces_to_nan_and_zero() {
        let groups = vec![
            IrRepGroup::new("E", vec![1, 2]),
            IrRepGroup::new("X", vec![]),
        ];
        let grouped =
            group_for_peak_table(&[1.0, 3.0], &[1.0, 1.0], &groups, Some(&[0.5, 0.5][..])).unwrap();

        assert_eq!(grouped.len(), 2);
        assert!(grouped.frequencies[1].is_nan());
        assert_eq!(grouped.intensities[1], 0.0);
        assert!(grouped.linewidths.unwrap()[1].is_nan());
    }

    #[test]
    fn test_from_labels_groups_consecutive_runs() {
        let groups = IrRepGroup::from_labels(&["Eu", "Eu", "A2u", "Eu"]);
        assert_eq!(
            groups,
            vec![
                IrRepGroup::new("Eu", vec![1, 2]),
                IrRepGroup::new("A2u", vec![3]),
                IrRepGroup::new("Eu", vec![4]),
            ]
        );
    }
}
