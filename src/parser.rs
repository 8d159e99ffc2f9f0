use log::{debug, trace};

use crate::{
    escape::Escaping,
    formats::{Document, Section},
};

const BOM: char = '\u{feff}';

/// Builds a document from INI text. Lines that are neither headers nor
/// `name = value` pairs are skipped, so this never fails.
pub fn parse(text: &str, escaping: Escaping) -> Document {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut document = Document::new();
    // None while still in the global section
    let mut current: Option<String> = None;

    // `lines` splits on LF and drops the CR of a CRLF pair
    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = section_header(line) {
            debug!("line {}: section [{name}]", number + 1);
            // a repeated header starts over with an empty section
            document.set_section(name, Section::new(name));
            current = Some(name.to_string());
            continue;
        }

        if line.starts_with([';', '#']) {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            trace!("line {}: no '=', skipped", number + 1);
            continue;
        };
        let key = key.trim();
        let value = escaping.decode(value.trim());

        let section = match &current {
            Some(name) => document.get_or_create_section(name),
            None => document.global_section_mut(),
        };
        section.set(key, value);
    }

    document
}

fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?
        .strip_suffix(']')
        .map(str::trim)
}
