use serde::{Deserialize, Serialize};

/// One row of the AUR search results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    #[serde(rename = "package")]
    pub name: String,
    pub version: String,
    pub votes: String,
    pub popularity: String,
    pub description: String,
    pub maintainer: String,
    pub last_update: String,
}
