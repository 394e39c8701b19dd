//! # peaks 命令实现
//!
//! 读取模式表，按 ir. rep. 分组生成峰表。
//!
//! ## 流程
//! 1. 读取 CSV 模式表
//! 2. 分组：`--irreps` 显式给出，否则按 `irrep` 列中相邻的相同标签
//! 3. 频率换算到 THz 后分组合并，再换算到显示单位
//! 4. 打印峰表，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/peaks.rs` 定义的参数
//! - 使用 `parsers/mode_table.rs`, `export`
//! - 使用 `peaks/`, `units/`

use crate::cli::peaks::PeaksArgs;
use crate::export;
use crate::parsers::{self, mode_table::ModeTable};
use crate::utils::output;
use spectrutil::error::{Result, SpectrutilError};
use spectrutil::peaks::{group_for_peak_table, parse_ir_rep_groups, GroupedPeaks, IrRepGroup};
use spectrutil::units::{convert_frequency_units, frequency_unit_label, FrequencyUnit};

use tabled::{Table, Tabled};

/// 执行 peaks 命令
pub fn execute(args: PeaksArgs) -> Result<()> {
    output::print_header("Peak Table");

    if !args.input.is_file() {
        return Err(SpectrutilError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    // 提前校验单位，避免读文件后才报错
    let input_units: FrequencyUnit = args.input_units.parse()?;
    let units: FrequencyUnit = args.units.parse()?;

    let table = parsers::parse_mode_table_file(&args.input)?;
    output::print_success(&format!(
        "Loaded {} mode(s) from '{}'",
        table.num_modes(),
        args.input.display()
    ));

    let groups = match (&args.irreps, &table.irreps) {
        (Some(text), _) => parse_ir_rep_groups(text)?,
        (None, Some(labels)) => IrRepGroup::from_labels(labels),
        (None, None) => {
            output::print_warning("No ir. rep. information; each mode is its own peak");
            (1..=table.num_modes())
                .map(|i| IrRepGroup::new("-", vec![i]))
                .collect()
        }
    };

    let grouped = group_modes(&table, &groups, input_units)?;

    output::print_info(&format!(
        "{} mode(s) grouped into {} peak(s)",
        table.num_modes(),
        grouped.len()
    ));

    let (grouped, linewidth_units) = convert_peak_units(grouped, input_units, units)?;

    print_peak_table(&grouped, units, linewidth_units);

    if let Some(ref path) = args.output {
        export::peaks_to_csv(
            &grouped,
            units.label(),
            linewidth_units.label(),
            path,
        )?;
        output::print_saved("Peak table", path.display());
    }

    Ok(())
}

/// 频率先换算到 THz 再分组
///
/// 波长与频率成反比，直接对 μm 取平均得到的不是平均频率对应的波长。
/// 线宽保持输入单位。
fn group_modes(
    table: &ModeTable,
    groups: &[IrRepGroup],
    input_units: FrequencyUnit,
) -> Result<GroupedPeaks> {
    let frequencies_thz = convert_frequency_units(
        &table.frequencies,
        input_units.key(),
        FrequencyUnit::Thz.key(),
    )?;

    group_for_peak_table(
        &frequencies_thz,
        &table.intensities,
        groups,
        table.linewidths.as_deref(),
    )
}

/// 换算峰表单位
///
/// 频率从 THz 换算到 `to`，线宽从 `from` 换算到 `to`。
/// 线宽无法换算为 μm（或从 μm 换算），此时线宽保留输入单位。
fn convert_peak_units(
    grouped: GroupedPeaks,
    from: FrequencyUnit,
    to: FrequencyUnit,
) -> Result<(GroupedPeaks, FrequencyUnit)> {
    let frequencies = convert_frequency_units(
        &grouped.frequencies,
        FrequencyUnit::Thz.key(),
        to.key(),
    )?;

    let linewidth_units = if to == FrequencyUnit::Um || from == FrequencyUnit::Um {
        if grouped.linewidths.is_some() && from != to {
            output::print_warning(&format!(
                "Linewidths are kept in {} (wavelength widths are not supported)",
                from.label()
            ));
        }
        from
    } else {
        to
    };

    let linewidths = match grouped.linewidths {
        Some(ref lw) => Some(convert_frequency_units(
            lw,
            from.key(),
            linewidth_units.key(),
        )?),
        None => None,
    };

    Ok((
        GroupedPeaks {
            frequencies,
            linewidths,
            ..grouped
        },
        linewidth_units,
    ))
}

/// 打印峰表
fn print_peak_table(peaks: &GroupedPeaks, units: FrequencyUnit, linewidth_units: FrequencyUnit) {
    #[derive(Tabled)]
    struct PeakRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Ir. Rep.")]
        symbol: String,
        #[tabled(rename = "Frequency")]
        frequency: String,
        #[tabled(rename = "Intensity")]
        intensity: String,
        #[tabled(rename = "Linewidth")]
        linewidth: String,
    }

    let unit_label = frequency_unit_label(units.key());
    let lw_label = frequency_unit_label(linewidth_units.key());

    let rows: Vec<PeakRow> = (0..peaks.len())
        .map(|i| PeakRow {
            index: i + 1,
            symbol: peaks.symbols[i].clone(),
            frequency: format!("{:.2} {}", peaks.frequencies[i], unit_label),
            intensity: format!("{:.4}", peaks.intensities[i]),
            linewidth: peaks
                .linewidths
                .as_ref()
                .map(|lw| format!("{:.3} {}", lw[i], lw_label))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupedPeaks {
        GroupedPeaks {
            frequencies: vec![1.0, 2.0],
            intensities: vec![3.0, 4.0],
            symbols: vec!["Eu".to_string(), "A2u".to_string()],
            linewidths: Some(vec![0.1, 0.2]),
        }
    }

    #[test]
    fn test_convert_peak_units_linear() {
        let (out, lw_units) =
            convert_peak_units(sample(), FrequencyUnit::Thz, FrequencyUnit::Mev).unwrap();

        assert_eq!(lw_units, FrequencyUnit::Mev);
        assert!((out.frequencies[1] - 2.0 * 4.13567).abs() < 1e-12);
        assert!((out.linewidths.unwrap()[0] - 0.1 * 4.13567).abs() < 1e-12);
        assert_eq!(out.intensities, vec![3.0, 4.0]);
        assert_eq!(out.symbols, vec!["Eu", "A2u"]);
    }

    #[test]
    fn test_wavelength_input_is_averaged_as_frequency() {
        // 10 μm 与 20 μm 简并：平均频率对应 40/3 μm，而不是 15 μm
        let table = ModeTable {
            frequencies: vec![10.0, 20.0],
            intensities: vec![1.0, 2.0],
            linewidths: None,
            irreps: None,
        };
        let groups = vec![IrRepGroup::new("Eu", vec![1, 2])];

        let grouped = group_modes(&table, &groups, FrequencyUnit::Um).unwrap();
        let (out, _) = convert_peak_units(grouped, FrequencyUnit::Um, FrequencyUnit::Um).unwrap();

        assert_eq!(out.len(), 1);
        assert!((out.frequencies[0] - 40.0 / 3.0).abs() < 1e-9);
        assert_eq!(out.intensities, vec![3.0]);
    }

    #[test]
    fn test_inv_cm_input_round_trips_through_thz() {
        let table = ModeTable {
            frequencies: vec![100.0, 300.0, 500.0],
            intensities: vec![1.0, 1.0, 1.0],
            linewidths: Some(vec![4.0, 6.0, 8.0]),
            irreps: None,
        };
        let groups = vec![
            IrRepGroup::new("Eg", vec![1, 2]),
            IrRepGroup::new("A1g", vec![3]),
        ];

        let grouped = group_modes(&table, &groups, FrequencyUnit::InvCm).unwrap();
        let (out, lw_units) =
            convert_peak_units(grouped, FrequencyUnit::InvCm, FrequencyUnit::InvCm).unwrap();

        assert_eq!(lw_units, FrequencyUnit::InvCm);
        assert!((out.frequencies[0] - 200.0).abs() < 1e-9);
        assert!((out.frequencies[1] - 500.0).abs() < 1e-9);
        assert_eq!(out.linewidths, Some(vec![5.0, 8.0]));
    }

    #[test]
    fn test_convert_peak_units_wavelength_keeps_linewidths() {
        let (out, lw_units) =
            convert_peak_units(sample(), FrequencyUnit::Thz, FrequencyUnit::Um).unwrap();

        assert_eq!(lw_units, FrequencyUnit::Thz);
        assert_eq!(out.linewidths, Some(vec![0.1, 0.2]));
        assert!(out.frequencies[0] > 299.0 && out.frequencies[0] < 300.0);
    }
}
