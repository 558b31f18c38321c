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

use crate::api::client::AurClient;
use crate::api::query::SearchQuery;
use crate::config::PurConfig;
use crate::error::Result;
use crate::extract::{Column, ResultsTable};
use crate::formatter::{PackageListing, dump_json, render_lines};
use log::info;

/// What to print from a search results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Packages,
    Versions,
    Votes,
    Popularities,
    Descriptions,
    Maintainers,
    LastUpdates,
    DumpJson,
}

impl SearchAction {
    /// Table column backing the action, for the single-column listings.
    pub fn column(&self) -> Option<Column> {
        match self {
            SearchAction::Versions => Some(Column::Version),
            SearchAction::Votes => Some(Column::Votes),
            SearchAction::Popularities => Some(Column::Popularity),
            SearchAction::Descriptions => Some(Column::Description),
            SearchAction::Maintainers => Some(Column::Maintainer),
            SearchAction::LastUpdates => Some(Column::LastUpdate),
            SearchAction::Packages | SearchAction::DumpJson => None,
        }
    }
}

pub struct SearchCommand {
    client: AurClient,
    numbered: bool,
}

impl SearchCommand {
    pub fn new(config: &PurConfig) -> Result<Self> {
        Ok(Self::with_client(AurClient::from_config(config)))
    }

    pub fn with_client(client: AurClient) -> Self {
        Self {
            client,
            numbered: false,
        }
    }

    /// Prefix package names with their 1-based position.
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    pub fn execute(&self, query: &SearchQuery, action: SearchAction) -> Result<()> {
        println!("{}", self.run(query, action)?);
        Ok(())
    }

    /// Fetch the results page once and render the requested action.
    pub fn run(&self, query: &SearchQuery, action: SearchAction) -> Result<String> {
        info!("Searching the AUR for '{}' ({action:?})", query.query);
        let html = self.client.fetch_search_page(query)?;
        render_page(&html, query, action, self.numbered)
    }
}

/// Render one action from the HTML of a search results page.
pub fn render_page(
    html: &str,
    query: &SearchQuery,
    action: SearchAction,
    numbered: bool,
) -> Result<String> {
    let table = ResultsTable::parse(html)?;

    if let Some(column) = action.column() {
        return Ok(render_lines(&table.column(column)?));
    }

    match action {
        SearchAction::DumpJson => dump_json(&table.records()?),
        _ => Ok(PackageListing::new(table.names(), &query.query).render(numbered)),
    }
}
