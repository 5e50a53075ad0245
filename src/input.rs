use color_eyre::{Result, eyre::WrapErr};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};
use tokio::{
    fs,
    io::{self, AsyncReadExt},
};

/// 输入来源
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// 不填或 `-` 表示标准输入
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path != Path::new("-") => Self::Path(path),
            _ => Self::Stdin,
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin => write!(f, "{}", t!("msg.stdin")),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 读取全部输入，必须是 UTF-8
pub async fn read_source(source: &Source) -> Result<String> {
    match source {
        Source::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .await
                .wrap_err_with(|| t!("err.read-stdin").to_string())?;
            Ok(buf)
        }
        Source::Path(path) => fs::read_to_string(path)
            .await
            .wrap_err_with(|| t!("err.read-file", path = path.display().to_string()).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_from_arg() {
        assert_eq!(Source::from_arg(None), Source::Stdin);
        assert_eq!(Source::from_arg(Some(PathBuf::from("-"))), Source::Stdin);
        assert_eq!(
            Source::from_arg(Some(PathBuf::from("notes.txt"))),
            Source::Path(PathBuf::from("notes.txt"))
        );
    }

    #[tokio::test]
    async fn test_read_file_keeps_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a\r\nb\n").unwrap();
        let text = read_source(&Source::Path(file.path().to_path_buf()))
            .await
            .unwrap();
        assert_eq!(text, "a\r\nb\n");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        assert!(read_source(&Source::Path(missing)).await.is_err());
    }

    #[tokio::test]
    async fn test_read_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        assert!(
            read_source(&Source::Path(file.path().to_path_buf()))
                .await
                .is_err()
        );
    }
}
