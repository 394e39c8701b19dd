//! # units 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/units.rs` 定义的参数
//! - 使用 `units/` 换算

use crate::cli::units::UnitsArgs;
use crate::utils::output;
use spectrutil::error::Result;
use spectrutil::units::{convert_frequency_units, frequency_unit_label};

use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ConversionRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
}

/// 执行 units 命令
pub fn execute(args: UnitsArgs) -> Result<()> {
    let converted = convert_frequency_units(&args.values, &args.from, &args.to)?;

    let from_label = frequency_unit_label(&args.from);
    let to_label = frequency_unit_label(&args.to);

    output::print_header(&format!("Frequency conversion: {} -> {}", from_label, to_label));

    let rows: Vec<ConversionRow> = args
        .values
        .iter()
        .zip(&converted)
        .map(|(v, c)| ConversionRow {
            from: format!("{} {}", v, from_label),
            to: format!("{:.6} {}", c, to_label),
        })
        .collect();

    println!("{}", Table::new(&rows));

    Ok(())
}
