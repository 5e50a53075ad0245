use super::report_input;
use crate::{args::JoinArgs, config::Config, input::read_source};
use color_eyre::Result;
use linewise::{join_lines, split_lines};

/// 有参数时拼接参数，否则读取输入并重新拼接各行
pub async fn join(args: JoinArgs, config: &Config) -> Result<String> {
    if !args.lines.is_empty() {
        return Ok(join_lines(&args.lines));
    }
    let text = read_source(&args.input).await?;
    let lines = split_lines(&text);
    report_input(config, "join", &args.input, &text, Some(lines.len()));
    Ok(join_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::temp_input, input::Source};

    #[tokio::test]
    async fn test_join_args() {
        let args = JoinArgs {
            lines: vec!["a".to_string(), "".to_string(), "b".to_string()],
            input: Source::Stdin,
        };
        assert_eq!(join(args, &Config::default()).await.unwrap(), "a\n\nb");
    }

    #[tokio::test]
    async fn test_join_input_drops_trailing_blank_lines() {
        let (_file, input) = temp_input("a\nb\n\n");
        let args = JoinArgs {
            lines: Vec::new(),
            input,
        };
        assert_eq!(join(args, &Config::default()).await.unwrap(), "a\nb");
    }
}
