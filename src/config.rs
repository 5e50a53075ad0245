use color_eyre::{Result, eyre::WrapErr};
use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;

pub const CONFIG_FILE_NAME: &str = "linewise.yaml";

/// 配置文件
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `prefix` 命令的默认前缀
    pub prefix: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// 从指定路径加载配置，空文件视为默认配置
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .wrap_err_with(|| t!("err.read-file", path = path.display().to_string()).to_string())?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .wrap_err_with(|| t!("err.config-parse", path = path.display().to_string()).to_string())
    }

    /// 显式指定的配置必须能加载；否则尝试程序目录下的默认配置，失败时退回默认值
    pub async fn discover(explicit: Option<&Path>) -> Result<Self> {
        Self::discover_at(explicit, &default_path()).await
    }

    async fn discover_at(explicit: Option<&Path>, default: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path).await;
        }
        if !fs::try_exists(default).await.unwrap_or(false) {
            return Ok(Self::default());
        }
        match Self::load_from_file(default).await {
            Ok(config) => {
                if config.verbose {
                    eprintln!("{}", t!("msg.config", path = default.display().to_string()));
                }
                Ok(config)
            }
            Err(err) => {
                eprintln!("{}: {:#?}", t!("err.config-load"), err);
                Ok(Self::default())
            }
        }
    }
}

fn default_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|p| p.to_owned()))
        .unwrap_or(PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}
