use std::fmt::Write;

use crate::{
    escape::Escaping,
    formats::{Document, Section},
};

/// Renders global properties first, then every named section behind a blank
/// line and its `[name]` header. Each line ends with `\n`.
pub fn to_string(document: &Document, escaping: Escaping) -> String {
    let mut out = String::new();
    write_properties(&mut out, document.global_section(), escaping);

    for section in document.sections() {
        if !out.is_empty() {
            out.push('\n');
        }
        // writing into a String cannot fail
        _ = writeln!(out, "[{}]", section.name());
        write_properties(&mut out, section, escaping);
    }

    out
}

fn write_properties(out: &mut String, section: &Section, escaping: Escaping) {
    for (key, value) in section.iter() {
        _ = writeln!(out, "{key} = {}", escaping.encode(value));
    }
}
