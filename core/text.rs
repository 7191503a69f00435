use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

/// Reads a UTF-8 file with `\r\n` and lone `\r` line endings turned into `\n`.
pub fn read_text(path: &Path) -> io::Result<String> {
    let content = fs::read_to_string(path)?;
    Ok(normalize_newlines(&content).into_owned())
}

pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endings_become_lf() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert!(matches!(normalize_newlines("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn read_text_normalizes_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.js");
        fs::write(&path, "x\r\ny\r\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "x\ny\n");
    }
}
