pub(super) const OPERATION_KEYWORDS: [&str; 4] = ["SELECT", "UPDATE", "INSERT", "DELETE"];

pub(super) const DDL_KEYWORDS: [&str; 3] = ["CREATE", "ALTER", "DROP"];

/// Tried, in order, right after a DDL verb and its trailing whitespace.
pub(super) const DDL_TARGET_KEYWORDS: [&str; 5] = ["TABLE", "INDEX", "PROCEDURE", "VIEW", "DATABASE"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ClauseKeyword {
    Into,
    From,
    Join,
}

pub(super) const CLAUSE_KEYWORDS: [(&str, ClauseKeyword); 3] = [
    ("INTO", ClauseKeyword::Into),
    ("FROM", ClauseKeyword::From),
    ("JOIN", ClauseKeyword::Join),
];

/// Returns the end of `kw` if it occurs at `bytes[pos..]`, case-insensitively
/// and word-bounded. `kw` must be an ASCII upper-case literal.
pub(super) fn match_keyword(bytes: &[u8], pos: usize, kw: &str) -> Option<usize> {
    let kw = kw.as_bytes();
    if pos + kw.len() > bytes.len() {
        return None;
    }
    for (i, &want) in kw.iter().enumerate() {
        if bytes[pos + i].to_ascii_uppercase() != want {
            return None;
        }
    }
    let end = pos + kw.len();
    if let Some(&next) = bytes.get(end) {
        if next.is_ascii_alphanumeric() || next == b'_' {
            return None;
        }
    }
    Some(end)
}

/// Appends `word` to `summary`, prefixed with a space unless `summary` is
/// still empty.
pub(super) fn push_summary_word(summary: &mut String, word: &str) {
    if !summary.is_empty() {
        summary.push(' ');
    }
    summary.push_str(word);
}

/// Appends `text` to `summary` with whitespace collapsed to a single space
/// and leading whitespace elided. Used only along the DDL path.
pub(super) fn push_summary_normalized(summary: &mut String, text: &str) {
    for ch in text.chars() {
        if ch.is_whitespace() {
            let skip = summary.is_empty() || summary.ends_with(|c: char| c.is_whitespace());
            if !skip {
                summary.push(' ');
            }
        } else {
            summary.push(ch);
        }
    }
}
