//! # ir. rep. 分组文本解析
//!
//! 解析命令行给出的分组描述，格式：
//! ```text
//! Eu:1,2;A2u:3;Eg:4-5
//! ```
//! 分号分隔各组，冒号前为符号，冒号后为逗号分隔的指标或闭区间 `a-b`。
//!
//! ## 依赖关系
//! - 被 `commands/peaks.rs` 使用
//! - 使用 `peaks/mod.rs` 的 IrRepGroup

use super::IrRepGroup;
use crate::error::{Result, SpectrutilError};

/// 解析分组描述文本
pub fn parse_ir_rep_groups(text: &str) -> Result<Vec<IrRepGroup>> {
    let mut groups = Vec::new();

    for entry in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (symbol, indices) = entry.split_once(':').ok_or_else(|| {
            SpectrutilError::InvalidArgument(format!(
                "Ir. rep. group '{}' must look like 'SYMBOL:1,2'",
                entry
            ))
        })?;

        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(SpectrutilError::InvalidArgument(format!(
                "Missing ir. rep. symbol in '{}'",
                entry
            )));
        }

        let mut band_indices = Vec::new();
        for token in indices.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            band_indices.extend(parse_index_token(token)?);
        }

        groups.push(IrRepGroup::new(symbol, band_indices));
    }

    if groups.is_empty() {
        return Err(SpectrutilError::InvalidArgument(format!(
            "No ir. rep. groups found in '{}'",
            text
        )));
    }

    Ok(groups)
}

/// 解析单个指标或闭区间
fn parse_index_token(token: &str) -> Result<Vec<usize>> {
    let invalid = || SpectrutilError::InvalidArgument(format!("Invalid band index '{}'", token));

    match token.split_once('-') {
        Some((start, end)) => {
            let start: usize = start.trim().parse().map_err(|_| invalid())?;
            let end: usize = end.trim().parse().map_err(|_| invalid())?;
            if end < start {
                return Err(invalid());
            }
            Ok((start..=end).collect())
        }
        None => Ok(vec![token.parse().map_err(|_| invalid())?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups() {
        let groups = parse_ir_rep_groups("Eu:1,2; A2u:3 ;Eg:4-6").unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], IrRepGroup::new("Eu", vec![1, 2]));
        assert_eq!(groups[1], IrRepGroup::new("A2u", vec![3]));
        assert_eq!(groups[2], IrRepGroup::new("Eg", vec![4, 5, 6]));
    }

    #[test]
    fn test_parse_keeps_duplicates_for_validation() {
        // 重复指标留给 group_for_peak_table 报告
        let groups = parse_ir_rep_groups("A:1,1").unwrap();
        assert_eq!(groups[0].band_indices, vec![1, 1]);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_ir_rep_groups("").is_err());
        assert!(parse_ir_rep_groups("Eu 1,2").is_err());
        assert!(parse_ir_rep_groups(":1").is_err());
        assert!(parse_ir_rep_groups("Eu:x").is_err());
        assert!(parse_ir_rep_groups("Eu:5-2").is_err());
        assert!(parse_ir_rep_groups("Eu:-1").is_err());
    }
}
