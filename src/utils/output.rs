//! # 美化输出工具
//!
//! 统一的终端输出样式。核心库不输出任何内容，所有提示都经由这里。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// 状态行前缀
enum Status {
    Ok,
    Err,
    Warn,
    Info,
    Done,
}

impl Status {
    fn tag(&self) -> ColoredString {
        match self {
            Status::Ok => "[OK]".green().bold(),
            Status::Err => "[ERR]".red().bold(),
            Status::Warn => "[WARN]".yellow().bold(),
            Status::Info => "[*]".blue().bold(),
            Status::Done => "[DONE]".green().bold(),
        }
    }
}

fn status_line(status: Status, msg: impl Display) {
    match status {
        Status::Err => eprintln!("{} {}", status.tag(), msg),
        _ => println!("{} {}", status.tag(), msg),
    }
}

pub fn print_success(msg: &str) {
    status_line(Status::Ok, msg);
}

/// 错误消息写到 stderr
pub fn print_error(msg: &str) {
    status_line(Status::Err, msg);
}

pub fn print_warning(msg: &str) {
    status_line(Status::Warn, msg);
}

pub fn print_info(msg: &str) {
    status_line(Status::Info, msg);
}

/// 打印文件保存消息
pub fn print_saved(what: &str, path: impl Display) {
    status_line(Status::Done, format!("{} {} {}", what, "->".cyan(), path));
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(60);
    println!("\n{}\n  {}\n{}\n", rule.dimmed(), title.bold(), rule.dimmed());
}
