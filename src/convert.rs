use anyhow::{Context, Result};
use clap::ValueEnum;
use std::{path::Path, str};

use crate::{escape::Escaping, formats::Document};

/// Formats a document can be read from or written to.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Ini,
    Json,
    PrettyJson,
    Yaml,
    Toml,
    Ron,
    PrettyRon,
}

impl Format {
    // Get format from file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let p = path.as_ref().extension()?.to_str()?;
        match p {
            "ini" | "cfg" | "conf" => Some(Self::Ini),
            "json" => Some(Self::Json),
            "hjson" => Some(Self::PrettyJson),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "ron" => Some(Self::Ron),
            "hron" => Some(Self::PrettyRon),
            _ => None,
        }
    }

    pub fn read(self, input: &[u8], escaping: Escaping) -> Result<Document> {
        let s = str::from_utf8(input).context("Input is not valid UTF-8")?;
        let document = match self {
            Format::Ini => Document::parse_with(s, escaping),
            Format::Json | Format::PrettyJson => serde_json::from_str(s)?,
            Format::Yaml => serde_yaml::from_str(s)?,
            Format::Toml => toml::from_str(s)?,
            Format::Ron | Format::PrettyRon => ron::from_str(s)?,
        };
        Ok(document)
    }

    pub fn write(self, document: &Document, escaping: Escaping) -> Result<Vec<u8>> {
        let s = match self {
            Format::Ini => document.to_text_with(escaping),
            Format::Json => serde_json::to_string(document)?,
            Format::PrettyJson => serde_json::to_string_pretty(document)?,
            Format::Yaml => serde_yaml::to_string(document)?,
            Format::Toml => toml::to_string(document)?,
            Format::Ron => ron::to_string(document)?,
            Format::PrettyRon => {
                ron::ser::to_string_pretty(document, ron::ser::PrettyConfig::new())?
            }
        };
        Ok(s.into_bytes())
    }
}
