//! 文本行工具库

pub mod lines;

pub use lines::{join_lines, prefix_lines, split_lines, trim_line};
