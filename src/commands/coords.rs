//! # coords 命令实现
//!
//! ## 依赖关系
//! - 使用 `cli/coords.rs` 定义的参数
//! - 使用 `parsers/positions.rs`, `export`
//! - 使用 `models/structure.rs` 完成坐标变换

use crate::cli::coords::{CoordinateSystem, CoordsArgs};
use crate::export;
use crate::parsers;
use crate::utils::output;
use spectrutil::error::{Result, SpectrutilError};
use spectrutil::models::{
    cartesian_to_fractional_coordinates, fractional_to_cartesian_coordinates, Lattice,
};

use tabled::{Table, Tabled};

/// 执行 coords 命令
pub fn execute(args: CoordsArgs) -> Result<()> {
    output::print_header(&format!("Converting positions to {} coordinates", args.to));

    if !args.input.is_file() {
        return Err(SpectrutilError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let lattice_vectors = parsers::parse_lattice(&args.lattice)?;
    let positions = parsers::parse_positions_file(&args.input)?;

    let converted = match args.to {
        CoordinateSystem::Fractional => {
            cartesian_to_fractional_coordinates(&positions, &lattice_vectors)?
        }
        CoordinateSystem::Cartesian => {
            fractional_to_cartesian_coordinates(&positions, &lattice_vectors)?
        }
    };

    // 形状已由上面的变换校验
    let lattice = Lattice::try_from_rows(&lattice_vectors)?;
    let (a, b, c, alpha, beta, gamma) = lattice.parameters();
    output::print_info(&format!(
        "Lattice: a = {:.4}, b = {:.4}, c = {:.4}, α = {:.2}°, β = {:.2}°, γ = {:.2}°, V = {:.4}",
        a,
        b,
        c,
        alpha,
        beta,
        gamma,
        lattice.volume().abs()
    ));
    output::print_success(&format!("Converted {} position(s)", converted.len()));

    print_positions(&converted);

    if let Some(ref path) = args.output {
        export::positions_to_csv(&converted, path)?;
        output::print_saved("Positions", path.display());
    }

    Ok(())
}

/// 打印坐标表格
fn print_positions(positions: &[[f64; 3]]) {
    #[derive(Tabled)]
    struct PositionRow {
        #[tabled(rename = "#")]
        index: usize,
        x: String,
        y: String,
        z: String,
    }

    let rows: Vec<PositionRow> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| PositionRow {
            index: i + 1,
            x: format!("{:.6}", p[0]),
            y: format!("{:.6}", p[1]),
            z: format!("{:.6}", p[2]),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }
}
