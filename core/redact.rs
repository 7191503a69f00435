use std::borrow::Cow;

pub const REDACTED_PLACEHOLDER: &str = "***HIDDEN***";

/// Keeps everything before the first `=` of an assignment line and replaces
/// the value. Comments, blank lines and lines without `=` are returned as is.
pub fn redact_line(line: &str) -> Cow<'_, str> {
    if line.trim_start().starts_with('#') {
        return Cow::Borrowed(line);
    }
    match line.split_once('=') {
        Some((key, _)) => Cow::Owned(format!("{key}={REDACTED_PLACEHOLDER}")),
        None => Cow::Borrowed(line),
    }
}

/// Redacts a whole env file. Lines are split on `\n` only, so a trailing
/// newline yields a trailing empty line.
pub fn redact_env(content: &str) -> String {
    content
        .split('\n')
        .map(redact_line)
        .collect::<Vec<_>>()
        .join("\n")
}
