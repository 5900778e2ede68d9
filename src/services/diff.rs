// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Raw per-file entry recovered from a unified diff, before classification.
///
/// Paths are kept exactly as written, including the `a/`/`b/` prefixes,
/// `/dev/null` markers, and any C-quoting. Decoding happens during
/// classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub source: String,
    pub target: String,
    pub is_added: bool,
    pub is_removed: bool,
    pub is_rename: bool,
}

pub struct DiffParser;

impl DiffParser {
    /// Whether the parser surfaces rename metadata at all. The effective
    /// rename handling is resolved once at startup from this and the
    /// configuration, never re-probed per file.
    pub const SUPPORTS_RENAMES: bool = true;

    /// Enumerate the per-file entries of a patch document.
    ///
    /// Scans for `diff --git` headers and the metadata lines that follow
    /// each one. Hunk content is never interpreted. An entry's paths come
    /// from its `---`/`+++` lines when present, from rename metadata for
    /// hunk-less renames, and from the header line as a last resort.
    pub fn parse(text: &str) -> Vec<DiffEntry> {
        let mut entries = Vec::new();
        let mut current: Option<EntryBuilder> = None;

        for line in text.lines() {
            if let Some(rest) = line.strip_prefix("diff --git ") {
                if let Some(builder) = current.take() {
                    entries.extend(builder.finish());
                }
                current = Some(EntryBuilder::start(rest));
                continue;
            }
            let Some(builder) = current.as_mut() else {
                continue;
            };
            if builder.in_hunk {
                // Hunk body lines may themselves start with "--- " or
                // "+++ "; metadata only precedes the first hunk.
                continue;
            }
            if line.starts_with("@@") {
                builder.in_hunk = true;
            } else if let Some(rest) = line.strip_prefix("--- ") {
                builder.source_line = Some(clean_file_line(rest));
            } else if let Some(rest) = line.strip_prefix("+++ ") {
                builder.target_line = Some(clean_file_line(rest));
            } else if line.starts_with("new file mode") {
                builder.new_file = true;
            } else if line.starts_with("deleted file mode") {
                builder.deleted_file = true;
            } else if let Some(rest) = line.strip_prefix("rename from ") {
                builder.rename_from = Some(rest.to_string());
            } else if let Some(rest) = line.strip_prefix("rename to ") {
                builder.rename_to = Some(rest.to_string());
            }
        }

        if let Some(builder) = current.take() {
            entries.extend(builder.finish());
        }

        entries
    }
}

#[derive(Debug, Default)]
struct EntryBuilder {
    header_source: Option<String>,
    header_target: Option<String>,
    source_line: Option<String>,
    target_line: Option<String>,
    rename_from: Option<String>,
    rename_to: Option<String>,
    new_file: bool,
    deleted_file: bool,
    in_hunk: bool,
}

impl EntryBuilder {
    fn start(header_rest: &str) -> Self {
        let (header_source, header_target) = split_header_paths(header_rest);
        Self {
            header_source,
            header_target,
            ..Self::default()
        }
    }

    fn finish(self) -> Option<DiffEntry> {
        let is_rename = self.rename_from.is_some() && self.rename_to.is_some();
        let source = self
            .source_line
            .or_else(|| self.rename_from.map(|p| format!("a/{p}")))
            .or(self.header_source)?;
        let target = self
            .target_line
            .or_else(|| self.rename_to.map(|p| format!("b/{p}")))
            .or(self.header_target)?;

        Some(DiffEntry {
            is_added: self.new_file || source == "/dev/null",
            is_removed: self.deleted_file || target == "/dev/null",
            is_rename,
            source,
            target,
        })
    }
}

/// Split the `a/<old> b/<new>` remainder of a `diff --git` header line.
fn split_header_paths(rest: &str) -> (Option<String>, Option<String>) {
    let rest = rest.trim_end();
    if rest.starts_with('"') {
        if let Some((first, after)) = take_quoted(rest) {
            let after = after.trim_start();
            let second = if after.starts_with('"') {
                take_quoted(after).map(|(quoted, _)| quoted)
            } else if after.is_empty() {
                None
            } else {
                Some(after.to_string())
            };
            return (Some(first), second);
        }
    }
    // The last " b/" occurrence marks the boundary, surviving spaces in
    // the old path.
    if let Some(idx) = rest.rfind(" b/") {
        return (
            Some(rest[..idx].to_string()),
            Some(rest[idx + 1..].to_string()),
        );
    }
    let mut parts = rest.split_whitespace();
    (
        parts.next().map(str::to_string),
        parts.next().map(str::to_string),
    )
}

/// Take one double-quoted token (quotes kept, escapes respected) off the
/// front of `s`, returning it and the remainder.
fn take_quoted(s: &str) -> Option<(String, &str)> {
    let bytes = s.as_bytes();
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some((s[..=i].to_string(), &s[i + 1..])),
            _ => i += 1,
        }
    }
    None
}

/// Strip the trailing tab-separated annotation some diff writers append
/// to `---`/`+++` lines.
fn clean_file_line(rest: &str) -> String {
    let rest = rest.split('\t').next().unwrap_or(rest);
    rest.trim_end().to_string()
}

/// Decode git's C-quoted path syntax (`core.quotepath`): strip the
/// surrounding quotes and resolve backslash and octal escapes, reading
/// the resulting bytes as UTF-8. Unquoted paths pass through unchanged.
pub fn decode_path(path: &str) -> String {
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };

    let bytes = inner.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' && i + 1 < bytes.len() {
            i += 1;
            match bytes[i] {
                b'n' => {
                    out.push(b'\n');
                    i += 1;
                }
                b't' => {
                    out.push(b'\t');
                    i += 1;
                }
                b'r' => {
                    out.push(b'\r');
                    i += 1;
                }
                b'\\' | b'"' => {
                    out.push(bytes[i]);
                    i += 1;
                }
                b'0'..=b'7' => {
                    let mut value: u32 = 0;
                    let mut digits = 0;
                    while digits < 3 && i < bytes.len() && (b'0'..=b'7').contains(&bytes[i]) {
                        value = value * 8 + u32::from(bytes[i] - b'0');
                        i += 1;
                        digits += 1;
                    }
                    out.push(value as u8);
                }
                other => {
                    out.push(other);
                    i += 1;
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}
