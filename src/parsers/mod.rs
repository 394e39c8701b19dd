//! # 解析器模块
//!
//! 命令行输入文件/字符串的解析器。核心库不做任何 I/O，文件读取全部在这里完成。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: mode_table, positions

pub mod mode_table;
pub mod positions;

pub use mode_table::parse_mode_table_file;
pub use positions::{parse_lattice, parse_positions_file};
