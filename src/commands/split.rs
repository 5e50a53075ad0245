use super::report_input;
use crate::{args::SplitArgs, config::Config, input::read_source};
use color_eyre::Result;
use linewise::split_lines;
use std::fmt::Write;

/// 每段输出一行，`escape` 时以 Debug 形式输出
pub async fn split(args: SplitArgs, config: &Config) -> Result<String> {
    let text = read_source(&args.input).await?;
    let lines = split_lines(&text);
    report_input(config, "split", &args.input, &text, Some(lines.len()));
    if args.count {
        return Ok(format!("{}\n", lines.len()));
    }
    let mut output = String::with_capacity(text.len() + lines.len());
    for line in lines {
        if args.escape {
            writeln!(output, "{line:?}")?;
        } else {
            output.push_str(line);
            output.push('\n');
        }
    }
    Ok(output)
}
