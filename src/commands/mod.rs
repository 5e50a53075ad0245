mod join;
mod prefix;
mod split;
mod trim;

pub use join::join;
pub use prefix::prefix;
pub use split::split;
pub use trim::trim;

use crate::{config::Config, input::Source};

/// 详细模式下在 stderr 报告读取的输入；`lines` 只在命令本身已拆分过时传入
fn report_input(
    config: &Config,
    command: &str,
    source: &Source,
    text: &str,
    lines: Option<usize>,
) {
    if config.verbose {
        eprintln!("{}", input_report(command, source, text.len(), lines));
    }
}

fn input_report(command: &str, source: &Source, bytes: usize, lines: Option<usize>) -> String {
    match lines {
        Some(lines) => t!(
            "msg.input",
            command = command,
            bytes = bytes,
            lines = lines,
            source = source.to_string(),
        )
        .to_string(),
        None => t!(
            "msg.input-bytes",
            command = command,
            bytes = bytes,
            source = source.to_string(),
        )
        .to_string(),
    }
}

#[cfg(test)]
pub(crate) fn temp_input(content: &str) -> (tempfile::NamedTempFile, Source) {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    let source = Source::Path(file.path().to_path_buf());
    (file, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_input_report_with_lines() {
        let source = Source::Path(PathBuf::from("notes.txt"));
        let report = input_report("split", &source, 12, Some(3));
        assert_eq!(report, "split: read 12 bytes (3 lines) from notes.txt");
    }

    #[test]
    fn test_input_report_without_lines() {
        let source = Source::Path(PathBuf::from("in.txt"));
        let report = input_report("trim", &source, 7, None);
        assert_eq!(report, "trim: read 7 bytes from in.txt");
    }
}
