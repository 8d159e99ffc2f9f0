//! Backslash escaping for property values.
//!
//! Values are trimmed when parsed, so boundary spaces and line breaks would be
//! lost without an escape. The table is:
//!
//! | raw            | escaped |
//! |----------------|---------|
//! | `\`            | `\\`    |
//! | carriage return| `\r`    |
//! | line feed      | `\n`    |
//! | tab            | `\t`    |
//! | boundary space | `\s`    |

use std::borrow::Cow;

/// Which value escaping a document is read and written with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Escaping {
    /// Backslash sequences, see the module docs.
    #[default]
    Backslash,
    /// Values are written and read verbatim.
    None,
}

impl Escaping {
    pub fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Backslash => encode(value),
            Escaping::None => Cow::Borrowed(value),
        }
    }

    pub fn decode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Backslash => decode(value),
            Escaping::None => Cow::Borrowed(value),
        }
    }
}

pub fn encode(value: &str) -> Cow<'_, str> {
    let needs_escape = value.starts_with(' ')
        || value.ends_with(' ')
        || value.contains(['\\', '\r', '\n', '\t']);
    if !needs_escape {
        return Cow::Borrowed(value);
    }

    let lead = value.len() - value.trim_start_matches(' ').len();
    // an all-space value is entirely leading
    let trail = if lead == value.len() {
        0
    } else {
        value.len() - value.trim_end_matches(' ').len()
    };
    let body = &value[lead..value.len() - trail];

    let mut out = String::with_capacity(value.len() + 8);
    out.push_str(&"\\s".repeat(lead));
    for c in body.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push_str(&"\\s".repeat(trail));
    Cow::Owned(out)
}

/// Single left-to-right pass. Unknown sequences and a dangling `\` are kept as written.
pub fn decode(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let replacement = match chars.peek() {
            Some('\\') => '\\',
            Some('r') => '\r',
            Some('n') => '\n',
            Some('t') => '\t',
            Some('s') => ' ',
            _ => {
                out.push('\\');
                continue;
            }
        };
        _ = chars.next();
        out.push(replacement);
    }
    Cow::Owned(out)
}
