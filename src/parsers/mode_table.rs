//! # 模式表 CSV 解析器
//!
//! 解析逐模式的频率/强度表，表头：
//! ```text
//! frequency,intensity[,linewidth][,irrep]
//! ```
//! `linewidth` 与 `irrep` 列可选，但一旦出现就必须每行都有值。
//!
//! ## 依赖关系
//! - 被 `commands/peaks.rs` 使用
//! - 使用 `csv` + `serde` 反序列化

use spectrutil::error::{Result, SpectrutilError};

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ModeRecord {
    frequency: f64,
    intensity: f64,
    #[serde(default)]
    linewidth: Option<f64>,
    #[serde(default)]
    irrep: Option<String>,
}

/// 逐模式数据
#[derive(Debug, Clone, Default)]
pub struct ModeTable {
    pub frequencies: Vec<f64>,
    pub intensities: Vec<f64>,
    pub linewidths: Option<Vec<f64>>,
    pub irreps: Option<Vec<String>>,
}

impl ModeTable {
    pub fn num_modes(&self) -> usize {
        self.frequencies.len()
    }
}

/// 读取模式表文件
pub fn parse_mode_table_file(path: &Path) -> Result<ModeTable> {
    let file = File::open(path).map_err(|e| SpectrutilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_mode_table(file)
}

/// 从任意输入流解析模式表
pub fn parse_mode_table<R: Read>(reader: R) -> Result<ModeTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let records = rdr
        .deserialize::<ModeRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;

    let mut table = ModeTable {
        frequencies: records.iter().map(|r| r.frequency).collect(),
        intensities: records.iter().map(|r| r.intensity).collect(),
        ..Default::default()
    };

    table.linewidths = all_or_none(records.iter().map(|r| r.linewidth), "linewidth")?;
    table.irreps = all_or_none(
        records
            .iter()
            .map(|r| r.irrep.clone().filter(|s| !s.is_empty())),
        "irrep",
    )?;

    Ok(table)
}

/// 整列要么全部有值，要么全部缺失
fn all_or_none<T, I>(column: I, name: &str) -> Result<Option<Vec<T>>>
where
    I: Iterator<Item = Option<T>>,
{
    let values: Vec<Option<T>> = column.collect();

    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    if let Some(row) = values.iter().position(Option::is_none) {
        return Err(SpectrutilError::InvalidArgument(format!(
            "Column '{}' is missing a value in data row {}",
            name,
            row + 1
        )));
    }

    Ok(Some(values.into_iter().flatten().collect()))
}
