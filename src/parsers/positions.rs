//! # 坐标与晶格输入解析
//!
//! - 坐标 CSV：每行一个位置，无表头
//! - 晶格字符串：分号分隔行，空格或逗号分隔分量，如 `"4 0 0; 0 4 0; 0 0 6"`
//!
//! 这里只负责把文本读成数值，形状检查交给 `models::structure`。
//!
//! ## 依赖关系
//! - 被 `commands/coords.rs` 使用
//! - 使用 `csv` 读取

use spectrutil::error::{Result, SpectrutilError};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 读取坐标文件
pub fn parse_positions_file(path: &Path) -> Result<Vec<Vec<f64>>> {
    let file = File::open(path).map_err(|e| SpectrutilError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_positions(file)
}

/// 从任意输入流解析坐标
pub fn parse_positions<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut positions = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let values = record
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>().map_err(|_| {
                    SpectrutilError::InvalidArgument(format!(
                        "Invalid coordinate '{}' in row {}",
                        s,
                        row + 1
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        positions.push(values);
    }

    Ok(positions)
}

/// 解析晶格字符串
pub fn parse_lattice(text: &str) -> Result<Vec<Vec<f64>>> {
    text.split(';')
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .map(|row| {
            row.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<f64>().map_err(|_| {
                        SpectrutilError::InvalidArgument(format!(
                            "Invalid lattice component '{}'",
                            s
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lattice() {
        let rows = parse_lattice("4 0 0; 0, 4, 0 ;0 0 6.5").unwrap();
        assert_eq!(
            rows,
            vec![
                vec![4.0, 0.0, 0.0],
                vec![0.0, 4.0, 0.0],
                vec![0.0, 0.0, 6.5]
            ]
        );
    }

    #[test]
    fn test_parse_lattice_keeps_bad_shape() {
        let rows = parse_lattice("1 0; 0 1").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(parse_lattice("1 0 x").is_err());
    }

    #[test]
    fn test_parse_positions() {
        let text = "0.0,0.0,0.0\n# comment\n0.5, 0.5, 0.25\n1,2\n";
        let positions = parse_positions(text.as_bytes()).unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[1], vec![0.5, 0.5, 0.25]);
        assert_eq!(positions[2].len(), 2);
    }
}
