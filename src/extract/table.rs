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

//! Recovery of typed package rows from the AUR search results page.
//!
//! The results table carries no semantic markup: every row is seven `<td>`
//! cells in a fixed order, and the package name additionally appears as the
//! text of a link to the package detail page. The page is therefore read as
//! two flat sequences (link texts and cell texts) and the cells are sliced into
//! fixed-width rows.

use crate::api::models::PackageRecord;
use crate::error::{PurError, Result};
use log::{debug, warn};
use regex::Regex;
use scraper::{Html, Selector};

/// Number of cells that make up one row of the results table.
pub const ROW_WIDTH: usize = 7;

/// Links to package detail pages; their text is the package name.
const PACKAGE_LINK_PATTERN: &str = r"/packages/[a-z-]";

/// A column of the results table, other than the name column at offset 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Version,
    Votes,
    Popularity,
    Description,
    Maintainer,
    LastUpdate,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Version,
        Column::Votes,
        Column::Popularity,
        Column::Description,
        Column::Maintainer,
        Column::LastUpdate,
    ];

    /// Position of the column's cell within a row.
    pub fn offset(&self) -> usize {
        match self {
            Column::Version => 1,
            Column::Votes => 2,
            Column::Popularity => 3,
            Column::Description => 4,
            Column::Maintainer => 5,
            Column::LastUpdate => 6,
        }
    }
}

/// The two flat sequences scraped from one search results page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    names: Vec<String>,
    cells: Vec<String>,
}

impl ResultsTable {
    pub fn parse(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);
        let link_selector = selector("a[href]")?;
        let cell_selector = selector("td")?;
        let package_link = Regex::new(PACKAGE_LINK_PATTERN)
            .map_err(|e| PurError::ParseError(format!("Invalid package link pattern: {e}")))?;

        let names: Vec<String> = document
            .select(&link_selector)
            .filter(|a| {
                a.value()
                    .attr("href")
                    .is_some_and(|href| package_link.is_match(href))
            })
            .map(|a| a.text().collect::<String>().trim().to_string())
            .collect();

        let cells: Vec<String> = document
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();

        debug!(
            "Scraped {} package links and {} table cells",
            names.len(),
            cells.len()
        );

        Ok(Self { names, cells })
    }

    /// Build a table from already extracted sequences. Values are trimmed.
    pub fn from_parts<N, C>(names: N, cells: C) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.as_ref().trim().to_string())
                .collect(),
            cells: cells
                .into_iter()
                .map(|c| c.as_ref().trim().to_string())
                .collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Complete rows of the table. A trailing partial row is not a record.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        let rows = self.cells.chunks_exact(ROW_WIDTH);
        let leftover = rows.remainder().len();
        if leftover > 0 {
            warn!(
                "Results table has {} cells, not a multiple of {ROW_WIDTH}; the last {leftover} form no record",
                self.cells.len()
            );
        }
        rows
    }

    pub fn row_count(&self) -> usize {
        self.cells.len() / ROW_WIDTH
    }

    /// Every cell at the column's offset, stepping one row width at a time.
    ///
    /// A trailing partial row still contributes its cell when it reaches the
    /// column's offset.
    pub fn column(&self, column: Column) -> Result<Vec<String>> {
        let offset = column.offset();
        if !self.cells.is_empty() && self.cells.len() <= offset {
            return Err(PurError::ParseError(format!(
                "results table has only {} cells, column {column:?} needs at least {}",
                self.cells.len(),
                offset + 1
            )));
        }

        Ok(self
            .cells
            .iter()
            .skip(offset)
            .step_by(ROW_WIDTH)
            .cloned()
            .collect())
    }

    /// Zip the package names with the table rows into full records.
    pub fn records(&self) -> Result<Vec<PackageRecord>> {
        let row_count = self.row_count();
        if self.names.len() != row_count {
            return Err(PurError::ParseError(format!(
                "found {} package links but {row_count} table rows",
                self.names.len()
            )));
        }

        Ok(self
            .names
            .iter()
            .zip(self.rows())
            .map(|(name, row)| PackageRecord {
                name: name.clone(),
                version: row[Column::Version.offset()].clone(),
                votes: row[Column::Votes.offset()].clone(),
                popularity: row[Column::Popularity.offset()].clone(),
                description: row[Column::Description.offset()].clone(),
                maintainer: row[Column::Maintainer.offset()].clone(),
                last_update: row[Column::LastUpdate.offset()].clone(),
            })
            .collect())
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| PurError::ParseError(format!("Invalid selector '{css}': {e}")))
}
