//! In-memory INI documents.
//!
//! A [`Document`] holds one unnamed global [`Section`] and any number of named
//! sections, each an insertion-ordered map of string properties.
//!
//! ```
//! use inidoc::Document;
//!
//! let mut doc = Document::parse("a = 1\n\n[S]\nb = 2\n");
//! assert_eq!(doc.global_section().get("a"), "1");
//!
//! doc.get_or_create_section("S").set("c", "3");
//! assert_eq!(doc.to_text(), "a = 1\n\n[S]\nb = 2\nc = 3\n");
//! ```

pub mod convert;
pub mod error;
pub mod escape;
pub mod formats;
pub mod parser;
pub mod serializer;
pub mod utils;

pub use error::{Error, Result};
pub use escape::Escaping;
pub use formats::{Document, Section};
