//! # 数据导出
//!
//! 把峰表和坐标写成 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/peaks.rs`, `commands/coords.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use spectrutil::error::{Result, SpectrutilError};
use spectrutil::peaks::GroupedPeaks;

use std::io::Write;
use std::path::Path;

/// 导出分组峰表
///
/// 列: irrep, frequency, intensity[, linewidth]；表头带单位。
pub fn peaks_to_csv(
    peaks: &GroupedPeaks,
    frequency_units: &str,
    linewidth_units: &str,
    output_path: &Path,
) -> Result<()> {
    let wtr = csv::Writer::from_path(output_path)?;
    write_peaks(peaks, frequency_units, linewidth_units, wtr, output_path)
}

fn write_peaks<W: Write>(
    peaks: &GroupedPeaks,
    frequency_units: &str,
    linewidth_units: &str,
    mut wtr: csv::Writer<W>,
    output_path: &Path,
) -> Result<()> {
    let mut header = vec![
        "irrep".to_string(),
        format!("frequency ({})", frequency_units),
        "intensity".to_string(),
    ];
    if peaks.linewidths.is_some() {
        header.push(format!("linewidth ({})", linewidth_units));
    }
    wtr.write_record(&header)?;

    for i in 0..peaks.len() {
        let mut record = vec![
            peaks.symbols[i].clone(),
            format!("{:.4}", peaks.frequencies[i]),
            format!("{:.6}", peaks.intensities[i]),
        ];
        if let Some(ref linewidths) = peaks.linewidths {
            record.push(format!("{:.4}", linewidths[i]));
        }
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| SpectrutilError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出坐标
pub fn positions_to_csv(positions: &[[f64; 3]], output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    for p in positions {
        wtr.write_record(p.iter().map(|x| format!("{:.10}", x)))?;
    }

    wtr.flush().map_err(|e| SpectrutilError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
