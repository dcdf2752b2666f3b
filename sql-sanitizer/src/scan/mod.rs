//! Single left-to-right pass over the input. At each position, try in
//! order: comment, literal, operation keyword, DDL keyword, clause keyword,
//! identifier, verbatim character, and advance past whatever consumed.

mod keywords;
mod literals;

use bitflags::bitflags;

use crate::scratch::{self, ScratchBuffer};
use crate::types::StatementInfo;
use keywords::{
    match_keyword, push_summary_normalized, push_summary_word, ClauseKeyword, CLAUSE_KEYWORDS,
    DDL_KEYWORDS, DDL_TARGET_KEYWORDS, OPERATION_KEYWORDS,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct ScanFlags: u8 {
        const CAPTURE_NEXT_TARGET = 1 << 0;
        const IN_FROM_CLAUSE = 1 << 1;
    }
}

fn is_sql_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    flags: ScanFlags,
    sanitized: ScratchBuffer,
    summary: ScratchBuffer,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, sanitized: ScratchBuffer, summary: ScratchBuffer) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            flags: ScanFlags::empty(),
            sanitized,
            summary,
        }
    }

    fn run(mut self) -> StatementInfo {
        while self.pos < self.bytes.len() {
            if self.try_comment() {
                continue;
            }
            if self.try_literal() {
                continue;
            }
            if self.try_operation_keyword() {
                continue;
            }
            if self.try_ddl_keyword() {
                continue;
            }
            if self.try_clause_keyword() {
                continue;
            }
            if self.try_identifier() {
                continue;
            }
            self.push_verbatim_char();
        }
        StatementInfo::new(self.sanitized.into_owned(), self.summary.into_owned())
    }

    fn try_comment(&mut self) -> bool {
        let b = self.bytes;
        let p = self.pos;
        if p + 1 < b.len() && b[p] == b'/' && b[p + 1] == b'*' {
            self.pos = literals::match_block_comment(b, p);
            return true;
        }
        if p + 1 < b.len() && b[p] == b'-' && b[p + 1] == b'-' {
            self.pos = literals::match_line_comment(b, p);
            return true;
        }
        false
    }

    fn try_literal(&mut self) -> bool {
        let b = self.bytes;
        let p = self.pos;
        if b[p] == b'\'' {
            self.pos = literals::match_string(b, p);
            self.sanitized.push('?');
            return true;
        }
        if let Some(end) = literals::match_hex(b, p) {
            self.pos = end;
            self.sanitized.push('?');
            return true;
        }
        if let Some(end) = literals::match_numeric(b, p) {
            self.pos = end;
            self.sanitized.push('?');
            return true;
        }
        false
    }

    fn try_operation_keyword(&mut self) -> bool {
        for kw in OPERATION_KEYWORDS {
            if let Some(end) = match_keyword(self.bytes, self.pos, kw) {
                let text = &self.src[self.pos..end];
                self.sanitized.push_str(text);
                push_summary_word(&mut self.summary, text);
                self.flags
                    .remove(ScanFlags::CAPTURE_NEXT_TARGET | ScanFlags::IN_FROM_CLAUSE);
                // UPDATE has no FROM/INTO before its target, so it arms
                // capture itself.
                if kw == "UPDATE" {
                    self.flags.insert(ScanFlags::CAPTURE_NEXT_TARGET);
                }
                self.pos = end;
                return true;
            }
        }
        false
    }

    fn try_ddl_keyword(&mut self) -> bool {
        for kw in DDL_KEYWORDS {
            if let Some(end) = match_keyword(self.bytes, self.pos, kw) {
                let verb = &self.src[self.pos..end];
                self.sanitized.push_str(verb);
                push_summary_normalized(&mut self.summary, verb);
                self.pos = end;

                let ws_start = self.pos;
                while self.pos < self.bytes.len() && is_sql_whitespace(self.bytes[self.pos]) {
                    self.pos += 1;
                }
                let ws = &self.src[ws_start..self.pos];
                self.sanitized.push_str(ws);
                push_summary_normalized(&mut self.summary, ws);

                for target_kw in DDL_TARGET_KEYWORDS {
                    if let Some(target_end) = match_keyword(self.bytes, self.pos, target_kw) {
                        let target = &self.src[self.pos..target_end];
                        self.sanitized.push_str(target);
                        push_summary_normalized(&mut self.summary, target);
                        self.flags.insert(ScanFlags::CAPTURE_NEXT_TARGET);
                        self.pos = target_end;
                        break;
                    }
                }
                return true;
            }
        }
        false
    }

    fn try_clause_keyword(&mut self) -> bool {
        for (kw, kind) in CLAUSE_KEYWORDS {
            if let Some(end) = match_keyword(self.bytes, self.pos, kw) {
                let text = &self.src[self.pos..end];
                self.sanitized.push_str(text);
                match kind {
                    // INTO also joins the summary, unlike FROM/JOIN.
                    ClauseKeyword::Into => {
                        push_summary_word(&mut self.summary, text);
                        self.flags.insert(ScanFlags::CAPTURE_NEXT_TARGET);
                    }
                    ClauseKeyword::From => {
                        self.flags
                            .insert(ScanFlags::CAPTURE_NEXT_TARGET | ScanFlags::IN_FROM_CLAUSE);
                    }
                    ClauseKeyword::Join => {
                        self.flags.insert(ScanFlags::CAPTURE_NEXT_TARGET);
                    }
                }
                self.pos = end;
                return true;
            }
        }
        false
    }

    fn try_identifier(&mut self) -> bool {
        let b = self.bytes;
        let p = self.pos;
        if !(b[p].is_ascii_alphabetic() || b[p] == b'_') {
            return false;
        }
        let mut end = p + 1;
        while end < b.len() && (b[end].is_ascii_alphanumeric() || b[end] == b'_' || b[end] == b'.') {
            end += 1;
        }
        let text = &self.src[p..end];
        self.sanitized.push_str(text);
        if self.flags.contains(ScanFlags::CAPTURE_NEXT_TARGET) {
            push_summary_word(&mut self.summary, text);
            self.flags.remove(ScanFlags::CAPTURE_NEXT_TARGET);
        }
        self.pos = end;
        if self.flags.contains(ScanFlags::IN_FROM_CLAUSE) && self.bytes.get(self.pos) == Some(&b',') {
            self.flags.insert(ScanFlags::CAPTURE_NEXT_TARGET);
        }
        true
    }

    // ASCII-only rules above never stop mid-character, so `self.pos` is
    // always a char boundary here.
    fn push_verbatim_char(&mut self) {
        let ch = self.src[self.pos..]
            .chars()
            .next()
            .unwrap_or('\u{FFFD}');
        self.sanitized.push(ch);
        self.pos += ch.len_utf8();
    }
}

/// Scans `input` and produces its sanitized SQL and summary. Never fails.
pub fn sanitize(input: &str) -> StatementInfo {
    let sanitized = scratch::claim_sanitized(input.len());
    let summary = scratch::claim_summary(input.len());
    Scanner::new(input, sanitized, summary).run()
}
