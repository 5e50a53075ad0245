use crate::input::Source;
use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::ensure};
use std::path::PathBuf;

/// 拼接、拆分、加前缀、去除行尾换行符
#[derive(Parser, Debug)]
#[command(name = "lw")]
#[command(version, about)]
struct Cli {
    /// 配置文件路径 (默认读取程序目录下的 linewise.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// 详细输出
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 用换行符拼接各参数；不给参数时读取输入并重新拼接各行
    Join(JoinCli),
    /// 按换行符拆分输入，每段输出一行
    Split(SplitCli),
    /// 给输入的每一行加上前缀 (各行直接相连)
    Prefix(PrefixCli),
    /// 去掉输入末尾的一个换行符
    Trim(TrimCli),
}

#[derive(clap::Args, Debug)]
struct JoinCli {
    /// 要拼接的行
    lines: Vec<String>,
    /// 输入文件 (- 表示标准输入)
    #[arg(short, long, conflicts_with = "lines")]
    input: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct SplitCli {
    /// 输入文件 (- 或不填表示标准输入)
    input: Option<PathBuf>,
    /// 以转义形式输出每一段，使 \r 等字符可见
    #[arg(short, long)]
    escape: bool,
    /// 只输出段数
    #[arg(long, conflicts_with = "escape")]
    count: bool,
}

#[derive(clap::Args, Debug)]
struct PrefixCli {
    /// 前缀 (不填则使用配置文件中的 prefix)
    prefix: Option<String>,
    /// 输入文件 (- 或不填表示标准输入)
    input: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct TrimCli {
    /// 输入文件 (- 或不填表示标准输入)
    input: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

#[derive(Debug)]
pub enum Command {
    Join(JoinArgs),
    Split(SplitArgs),
    Prefix(PrefixArgs),
    Trim(TrimArgs),
}

#[derive(Debug, Clone)]
pub struct JoinArgs {
    pub lines: Vec<String>,
    pub input: Source,
}

#[derive(Debug, Clone)]
pub struct SplitArgs {
    pub input: Source,
    pub escape: bool,
    pub count: bool,
}

#[derive(Debug, Clone)]
pub struct PrefixArgs {
    pub prefix: Option<String>,
    pub input: Source,
}

#[derive(Debug, Clone)]
pub struct TrimArgs {
    pub input: Source,
}

impl Args {
    pub fn parse() -> Result<Args> {
        match Cli::try_parse() {
            Ok(cli) => Self::from_cli(cli),
            Err(err) => err.exit(),
        }
    }

    fn from_cli(cli: Cli) -> Result<Args> {
        let command = match cli.command {
            Commands::Join(cli) => Command::Join(JoinArgs {
                lines: cli.lines,
                input: source(cli.input)?,
            }),
            Commands::Split(cli) => Command::Split(SplitArgs {
                input: source(cli.input)?,
                escape: cli.escape,
                count: cli.count,
            }),
            Commands::Prefix(cli) => Command::Prefix(PrefixArgs {
                prefix: cli.prefix,
                input: source(cli.input)?,
            }),
            Commands::Trim(cli) => Command::Trim(TrimArgs {
                input: source(cli.input)?,
            }),
        };
        Ok(Args {
            config: cli.config,
            verbose: cli.verbose,
            command,
        })
    }
}

fn source(arg: Option<PathBuf>) -> Result<Source> {
    let source = Source::from_arg(arg);
    if let Source::Path(ref path) = source {
        ensure!(
            !path.is_dir(),
            "{}",
            t!("err.input-is-dir", path = path.display().to_string())
        );
    }
    Ok(source)
}
