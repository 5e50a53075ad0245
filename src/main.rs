mod args;
mod commands;
mod config;
mod input;

use args::{Args, Command};
use color_eyre::{Result, eyre::WrapErr};
use config::Config;
use mimalloc::MiMalloc;
use rust_i18n::set_locale;
use tokio::io::{self, AsyncWriteExt};

#[macro_use]
extern crate rust_i18n;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

i18n!("./locales", fallback = "en");

fn init_locale() {
    if let Some(ref locale) = sys_locale::get_locale() {
        set_locale(locale);
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    init_locale();
    color_eyre::install()?;
    let args = Args::parse()?;
    let mut config = Config::discover(args.config.as_deref()).await?;
    config.verbose |= args.verbose;
    if config.verbose {
        eprintln!("{}", t!("msg.version", version = VERSION));
    }

    let output = match args.command {
        Command::Join(join_args) => commands::join(join_args, &config).await?,
        Command::Split(split_args) => commands::split(split_args, &config).await?,
        Command::Prefix(prefix_args) => commands::prefix(prefix_args, &config).await?,
        Command::Trim(trim_args) => commands::trim(trim_args, &config).await?,
    };

    let mut stdout = io::stdout();
    stdout
        .write_all(output.as_bytes())
        .await
        .wrap_err_with(|| t!("err.write-stdout").to_string())?;
    stdout.flush().await?;
    Ok(())
}
