use super::report_input;
use crate::{args::TrimArgs, config::Config, input::read_source};
use color_eyre::Result;
use linewise::trim_line;

/// 去掉输入末尾的一个换行符
pub async fn trim(args: TrimArgs, config: &Config) -> Result<String> {
    let text = read_source(&args.input).await?;
    report_input(config, "trim", &args.input, &text, None);
    Ok(trim_line(&text).to_string())
}
