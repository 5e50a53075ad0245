use super::report_input;
use crate::{args::PrefixArgs, config::Config, input::read_source};
use color_eyre::Result;
use linewise::prefix_lines;

pub const DEFAULT_PREFIX: &str = "> ";

/// 给每一行加前缀，前缀依次取参数、配置、默认值
pub async fn prefix(args: PrefixArgs, config: &Config) -> Result<String> {
    let prefix = args
        .prefix
        .as_deref()
        .or(config.prefix.as_deref())
        .unwrap_or(DEFAULT_PREFIX);
    let text = read_source(&args.input).await?;
    report_input(config, "prefix", &args.input, &text, None);
    Ok(prefix_lines(prefix, &text))
}
