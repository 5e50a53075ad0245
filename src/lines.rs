//! 文本行工具
//! 拼接、拆分、加前缀、去除行尾换行符，全部为纯函数

/// 用 `\n` 拼接各行，最后一行之后不追加换行
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            result.push('\n');
        }
        result.push_str(line.as_ref());
    }
    result
}

/// 按 `\n` 拆分文本
///
/// 空文本得到空序列。行尾的 `\r` 会保留在行内，末尾的空行会被丢弃。
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// 给每一行加上前缀
///
/// 各行直接相连，不会重新插入换行符：`prefix_lines(">", "a\nb") == ">a>b"`。
/// 空文本原样返回。
pub fn prefix_lines(prefix: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let lines = split_lines(text);
    let mut result = String::with_capacity(text.len() + prefix.len() * lines.len());
    for line in lines {
        result.push_str(prefix);
        result.push_str(line);
    }
    result
}

/// 去掉恰好一个行尾换行符，优先匹配 `\r\n`
pub fn trim_line(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\r'))
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
