//! # spectrutil 命令行
//!
//! 核心库的命令行调用方，负责读取输入文件和输出结果。
//!
//! ## 子命令
//! - `units`  - 频率单位换算
//! - `peaks`  - 按 ir. rep. 分组生成峰表
//! - `coords` - 笛卡尔/分数坐标转换
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (输入解析)
//!   │     └── export.rs  (CSV 导出)
//!   ├── utils/      (终端输出)
//!   └── spectrutil  (核心库)
//! ```

mod cli;
mod commands;
mod export;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
