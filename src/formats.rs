use indexmap::IndexMap;
use log::info;
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, fs, path::Path, str::FromStr};

use crate::{
    error::{Error, Result},
    escape::Escaping,
    parser, serializer,
};

pub type Properties = IndexMap<String, String>;

/// A named group of properties. The global section has an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    properties: Properties,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            properties: Properties::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of `key`, or `""` when it was never set.
    pub fn get(&self, key: &str) -> &str {
        self.try_get(key).unwrap_or_default()
    }

    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Overwrites in place, so an existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }
}

impl<K, V> Extend<(K, V)> for Section
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

/// An INI document: the global section plus the named sections in the order
/// they were first registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentRepr", into = "DocumentRepr")]
pub struct Document {
    global: Section,
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> Self {
        parser::parse(text, Escaping::default())
    }

    pub fn parse_with(text: &str, escaping: Escaping) -> Self {
        parser::parse(text, escaping)
    }

    pub fn global_section(&self) -> &Section {
        &self.global
    }

    pub fn global_section_mut(&mut self) -> &mut Section {
        &mut self.global
    }

    /// Returns the section called `name`, registering an empty one first when
    /// there is none. Reading through this method therefore mutates the
    /// document; use [`Document::section`] for a side-effect free lookup.
    pub fn get_or_create_section(&mut self, name: &str) -> &mut Section {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| Section::new(name))
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Inserts `section` under `name`, replacing whatever was registered there.
    /// A replaced section keeps its place in the enumeration order.
    pub fn set_section(&mut self, name: &str, mut section: Section) -> Option<Section> {
        section.name = name.to_string();
        self.sections.insert(name.to_string(), section)
    }

    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.sections.shift_remove(name)
    }

    /// Named sections in registration order. The global section is not included.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of named sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.global.is_empty()
    }

    pub fn to_text(&self) -> String {
        serializer::to_string(self, Escaping::default())
    }

    pub fn to_text_with(&self, escaping: Escaping) -> String {
        serializer::to_string(self, escaping)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_from_path_with(path, Escaping::default())
    }

    pub fn load_from_path_with<P: AsRef<Path>>(path: P, escaping: Escaping) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        let document = parser::parse(&text, escaping);
        info!(
            "Loaded {} with {} section(s)",
            path.display(),
            document.len()
        );
        Ok(document)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_to_path_with(path, Escaping::default())
    }

    /// Overwrites the file at `path` with the rendered document.
    pub fn save_to_path_with<P: AsRef<Path>>(&self, path: P, escaping: Escaping) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(Error::InvalidArgument(
                "save path must not be blank".to_string(),
            ));
        }

        fs::write(path, self.to_text_with(escaping)).map_err(|e| Error::write(path, e))?;
        info!("Saved {}", path.display());
        Ok(())
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Document::parse(s))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

// Plain shape used by the serde formats: section names are map keys.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DocumentRepr {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    global: Properties,
    #[serde(default)]
    sections: IndexMap<String, Properties>,
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        let sections = repr
            .sections
            .into_iter()
            .map(|(name, properties)| {
                let section = Section {
                    name: name.clone(),
                    properties,
                };
                (name, section)
            })
            .collect();

        Document {
            global: Section {
                name: String::new(),
                properties: repr.global,
            },
            sections,
        }
    }
}

impl From<Document> for DocumentRepr {
    fn from(document: Document) -> Self {
        DocumentRepr {
            global: document.global.properties,
            sections: document
                .sections
                .into_iter()
                .map(|(name, section)| (name, section.properties))
                .collect(),
        }
    }
}
