/// Strip one trailing line break (`\r\n`, `\n`, `\r` or a Unicode line separator).
///
/// `ropey` counts the same set of breaks when splitting lines, so line text and line offsets
/// stay consistent.
pub(crate) fn trim_line_break(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        return stripped;
    }
    for br in ['\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}'] {
        if let Some(stripped) = line.strip_suffix(br) {
            return stripped;
        }
    }
    line
}
