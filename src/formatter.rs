//! Text and JSON rendering of extracted search results.

use crate::api::models::PackageRecord;
use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Outcome of listing package names for a query.
///
/// An empty result is a successful outcome of its own, rendered as a message
/// that names the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageListing {
    Found(Vec<String>),
    NoPackages { query: String },
}

impl PackageListing {
    pub fn new(names: &[String], query: &str) -> Self {
        if names.is_empty() {
            PackageListing::NoPackages {
                query: query.to_string(),
            }
        } else {
            PackageListing::Found(names.to_vec())
        }
    }

    /// Render one name per line, optionally prefixed with a 1-based index.
    pub fn render(&self, numbered: bool) -> String {
        match self {
            PackageListing::Found(names) if numbered => render_numbered(names),
            PackageListing::Found(names) => render_lines(names),
            PackageListing::NoPackages { query } => {
                format!("No packages with name \"{query}\" were found")
            }
        }
    }
}

impl fmt::Display for PackageListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

pub fn render_lines<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_numbered<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{}. {}", i + 1, v.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes records as an object keyed by row index (`"0"`, `"1"`, ...),
/// keeping page order.
struct IndexedRecords<'a>(&'a [PackageRecord]);

impl Serialize for IndexedRecords<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, record) in self.0.iter().enumerate() {
            map.serialize_entry(&i.to_string(), record)?;
        }
        map.end()
    }
}

/// Compact JSON object of all records keyed by row index.
pub fn dump_json(records: &[PackageRecord]) -> Result<String> {
    Ok(serde_json::to_string(&IndexedRecords(records))?)
}
