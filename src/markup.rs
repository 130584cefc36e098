//! Safe content markup for untrusted text.
//!
//! Announcement bodies, ticket descriptions and status messages are free
//! text typed by users. `render_text` turns them into display markup in
//! which the only live HTML is the inline link construct
//! `[label](url)` - everything else is escaped before link scanning even
//! begins, so a label or URL can never smuggle a raw tag through.
//!
//! The function is total: malformed link syntax degrades to literal
//! characters, never an error. The worst a hostile input achieves is a
//! literal `[` on screen.
//!
//! Not idempotent by design - feeding output back in would double-escape
//! the entities it produced. Callers apply it once per stored field at
//! render time.

use std::fmt;

/// Markup that has already been escaped and must be rendered verbatim by
/// the template boundary, never re-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SafeMarkup(String);

impl SafeMarkup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTML-escape the five significant characters. `&` goes first so the
/// entities this pass emits are not themselves re-escaped.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Find the matching `)` for a URL opened just before `start`, counting
/// parenthesis depth so URLs may contain balanced groups. Returns the
/// index of the closing paren, or None when unterminated.
fn find_url_end(text: &[char], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (k, &c) in text.iter().enumerate().skip(start) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(k);
                }
            }
            _ => {}
        }
    }
    None
}

/// Convert raw untrusted text into escaped, link-aware display markup.
///
/// Single left-to-right scan over the escaped text. On `[`, look for the
/// first `]`; if it is immediately followed by `(` and the URL closes,
/// emit an anchor around the already-escaped label and URL and jump past
/// it. Any malformed shape emits the `[` literally and resumes the scan
/// at the next character - the label characters are revisited and may
/// start a fresh link of their own. Newlines become `<br>` at the end.
pub fn render_text(raw: &str) -> SafeMarkup {
    if raw.is_empty() {
        return SafeMarkup::default();
    }

    let escaped: Vec<char> = escape_html(raw).chars().collect();
    let n = escaped.len();
    let mut out = String::with_capacity(n);
    let mut i = 0;

    while i < n {
        if escaped[i] == '[' {
            // First ']' after the label start.
            let label_start = i + 1;
            let label_end = escaped[label_start..]
                .iter()
                .position(|&c| c == ']')
                .map(|off| label_start + off);

            if let Some(label_end) = label_end {
                if label_end + 1 < n && escaped[label_end + 1] == '(' {
                    let url_start = label_end + 2;
                    if let Some(url_end) = find_url_end(&escaped, url_start) {
                        let label: String = escaped[label_start..label_end].iter().collect();
                        let url: String = escaped[url_start..url_end].iter().collect();
                        out.push_str("<a href=\"");
                        out.push_str(&url);
                        out.push_str("\">");
                        out.push_str(&label);
                        out.push_str("</a>");
                        i = url_end + 1;
                        continue;
                    }
                }
            }
            // Malformed: the '[' alone is literal, the rest rescans.
        }

        out.push(escaped[i]);
        i += 1;
    }

    SafeMarkup(out.replace('\n', "<br>"))
}

/// `render_text` for possibly absent fields. None yields empty markup
/// without any escaping pass.
pub fn render_optional(raw: Option<&str>) -> SafeMarkup {
    match raw {
        Some(text) => render_text(text),
        None => SafeMarkup::default(),
    }
}

// =============================================================================
// Tests
// =============================================================================
