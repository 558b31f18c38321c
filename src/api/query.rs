// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{PurError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Field the AUR matches the keyword against (`SeB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchBy {
    #[default]
    NameDesc,
    NameOnly,
    PackageBase,
    ExactName,
    ExactPkgBase,
    Keywords,
    Maintainer,
    CoMaintainer,
    MaintainerOrCo,
    Submitter,
}

impl SearchBy {
    pub const ALL: [SearchBy; 10] = [
        SearchBy::NameDesc,
        SearchBy::NameOnly,
        SearchBy::PackageBase,
        SearchBy::ExactName,
        SearchBy::ExactPkgBase,
        SearchBy::Keywords,
        SearchBy::Maintainer,
        SearchBy::CoMaintainer,
        SearchBy::MaintainerOrCo,
        SearchBy::Submitter,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            SearchBy::NameDesc => "nd",
            SearchBy::NameOnly => "n",
            SearchBy::PackageBase => "b",
            SearchBy::ExactName => "N",
            SearchBy::ExactPkgBase => "B",
            SearchBy::Keywords => "k",
            SearchBy::Maintainer => "m",
            SearchBy::CoMaintainer => "c",
            SearchBy::MaintainerOrCo => "M",
            SearchBy::Submitter => "s",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchBy::NameDesc => "name-desc",
            SearchBy::NameOnly => "name",
            SearchBy::PackageBase => "package-base",
            SearchBy::ExactName => "exact-name",
            SearchBy::ExactPkgBase => "exact-package-base",
            SearchBy::Keywords => "keywords",
            SearchBy::Maintainer => "maintainer",
            SearchBy::CoMaintainer => "co-maintainer",
            SearchBy::MaintainerOrCo => "maintainer-or-co",
            SearchBy::Submitter => "submitter",
        }
    }
}

impl FromStr for SearchBy {
    type Err = PurError;

    fn from_str(s: &str) -> Result<Self> {
        SearchBy::ALL
            .into_iter()
            .find(|v| v.as_param() == s || v.name() == s)
            .ok_or_else(|| {
                PurError::ValidationError(format!(
                    "unknown search field '{s}' (expected one of: nd, n, b, N, B, k, m, c, M, s)"
                ))
            })
    }
}

/// Out-of-date filter (`outdated`). Only `""`, `"on"` and `"off"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outdated {
    #[default]
    All,
    Flagged,
    NotFlagged,
}

impl Outdated {
    pub fn as_param(&self) -> &'static str {
        match self {
            Outdated::All => "",
            Outdated::Flagged => "on",
            Outdated::NotFlagged => "off",
        }
    }
}

impl FromStr for Outdated {
    type Err = PurError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(Outdated::All),
            "on" => Ok(Outdated::Flagged),
            "off" => Ok(Outdated::NotFlagged),
            other => Err(PurError::ValidationError(format!(
                "outdated must be 'on', 'off' or empty, got '{other}'"
            ))),
        }
    }
}

/// Column the result page is sorted by (`SB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    Name,
    Votes,
    #[default]
    Popularity,
    Voted,
    Notify,
    Maintainer,
    LastModified,
}

impl SortBy {
    pub const ALL: [SortBy; 7] = [
        SortBy::Name,
        SortBy::Votes,
        SortBy::Popularity,
        SortBy::Voted,
        SortBy::Notify,
        SortBy::Maintainer,
        SortBy::LastModified,
    ];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortBy::Name => "n",
            SortBy::Votes => "v",
            SortBy::Popularity => "p",
            SortBy::Voted => "w",
            SortBy::Notify => "o",
            SortBy::Maintainer => "m",
            SortBy::LastModified => "l",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::Votes => "votes",
            SortBy::Popularity => "popularity",
            SortBy::Voted => "voted",
            SortBy::Notify => "notify",
            SortBy::Maintainer => "maintainer",
            SortBy::LastModified => "last-modified",
        }
    }
}

impl FromStr for SortBy {
    type Err = PurError;

    fn from_str(s: &str) -> Result<Self> {
        SortBy::ALL
            .into_iter()
            .find(|v| v.as_param() == s || v.name() == s)
            .ok_or_else(|| {
                PurError::ValidationError(format!(
                    "unknown sort field '{s}' (expected one of: n, v, p, w, o, m, l)"
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "a",
            SortOrder::Descending => "d",
        }
    }
}

impl FromStr for SortOrder {
    type Err = PurError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "a" | "ascending" => Ok(SortOrder::Ascending),
            "d" | "descending" => Ok(SortOrder::Descending),
            other => Err(PurError::ValidationError(format!(
                "unknown sort order '{other}' (expected 'a' or 'd')"
            ))),
        }
    }
}

macro_rules! display_as_param {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_param())
                }
            }
        )*
    };
}

display_as_param!(SearchBy, Outdated, SortBy, SortOrder);

/// Parameters of one request against the AUR package search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub page: u32,
    pub query: String,
    pub search_by: SearchBy,
    pub outdated: Outdated,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub per_page: u32,
    pub only_orphans: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            query: String::new(),
            search_by: SearchBy::default(),
            outdated: Outdated::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            per_page: DEFAULT_PER_PAGE,
            only_orphans: false,
        }
    }
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, search_by: SearchBy) -> Self {
        Self {
            query: query.into(),
            search_by,
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn search_by(mut self, search_by: SearchBy) -> Self {
        self.search_by = search_by;
        self
    }

    pub fn outdated(mut self, outdated: Outdated) -> Self {
        self.outdated = outdated;
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn only_orphans(mut self, only_orphans: bool) -> Self {
        self.only_orphans = only_orphans;
        self
    }

    /// Value of the `submit` field; the AUR switches to the orphan listing on it.
    pub fn submit_label(&self) -> &'static str {
        if self.only_orphans { "Orphans" } else { "Go" }
    }
}

/// Parameters of one request against the RPC suggestion endpoint.
///
/// The RPC protocol version is pinned by the client and cannot be set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestQuery {
    pub arg: String,
}

impl SuggestQuery {
    pub fn new(arg: impl Into<String>) -> Self {
        Self { arg: arg.into() }
    }
}
