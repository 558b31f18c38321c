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

use clap::Parser;
use std::io::IsTerminal;
use pur::api::query::{Outdated, SearchBy, SearchQuery, SortBy, SortOrder};
use pur::commands::{SearchAction, SearchCommand, SuggestCommand};
use pur::config::{PurConfig, new_pur_config};
use pur::error::{PurError, Result, format_error_chain, format_error_with_color, get_exit_code};
use pur::logging;

const USAGE: &str = "Usage: pur [OPTION]... --query QUERY
Parameters:
  --page          page number of the results to retrieve (default: 0)
  --query         text to search the AUR for
  --query-by      field to match against: nd, n, b, N, B, k, m, c, M, s
                  (or name-desc, name, package-base, exact-name,
                  exact-package-base, keywords, maintainer, co-maintainer,
                  maintainer-or-co, submitter)
  --outdated      'on' for flagged packages, 'off' for current ones,
                  empty for both
  --sort-by       n, v, p, w, o, m, l (name, votes, popularity, voted,
                  notify, maintainer, last-modified)
  --sort-order    a or d (ascending, descending)
  --per-page      number of results per page (default: 10)
  --only-orphans  list orphaned packages only

Actions:
  --packages, --versions, --votes, --popularities, --descriptions,
  --maintainers, --last-updates, --dump-json, --suggestions

Others:
  --line-numbers  number the lines printed by --packages
  -v, --verbose   increase log verbosity (-v info, -vv debug, -vvv trace)
  --usage         print this text
";

#[derive(Parser)]
#[command(name = "pur")]
#[command(author, version, about = "Search the Arch User Repository", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print package names
    #[arg(long)]
    packages: bool,

    /// Print package versions
    #[arg(long)]
    versions: bool,

    /// Print package votes
    #[arg(long)]
    votes: bool,

    /// Print package popularities
    #[arg(long)]
    popularities: bool,

    /// Print package descriptions
    #[arg(long)]
    descriptions: bool,

    /// Print package maintainers
    #[arg(long)]
    maintainers: bool,

    /// Print package last update dates
    #[arg(long)]
    last_updates: bool,

    /// Print every column of the results as JSON
    #[arg(long)]
    dump_json: bool,

    /// Print name suggestions for the query
    #[arg(long)]
    suggestions: bool,

    /// List orphaned packages only
    #[arg(long)]
    only_orphans: bool,

    /// Number the lines printed by --packages
    #[arg(long)]
    line_numbers: bool,

    /// Page number of the results
    #[arg(long)]
    page: Option<u32>,

    /// Text to search for
    #[arg(long)]
    query: Option<String>,

    /// Field to match the query against
    #[arg(long)]
    query_by: Option<String>,

    /// Out-of-date filter: on, off or empty
    #[arg(long)]
    outdated: Option<String>,

    /// Column to sort by
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort order: a or d
    #[arg(long)]
    sort_order: Option<String>,

    /// Results per page
    #[arg(long)]
    per_page: Option<u32>,

    /// Print usage text
    #[arg(long)]
    usage: bool,
}

impl Cli {
    /// Selected action; the first flag in listing order wins.
    fn action(&self) -> Option<SearchAction> {
        [
            (self.packages, SearchAction::Packages),
            (self.versions, SearchAction::Versions),
            (self.votes, SearchAction::Votes),
            (self.popularities, SearchAction::Popularities),
            (self.descriptions, SearchAction::Descriptions),
            (self.maintainers, SearchAction::Maintainers),
            (self.last_updates, SearchAction::LastUpdates),
            (self.dump_json, SearchAction::DumpJson),
        ]
        .into_iter()
        .find_map(|(selected, action)| selected.then_some(action))
    }

    fn search_query(&self, query: &str, query_by: &str, config: &PurConfig) -> Result<SearchQuery> {
        let outdated = match self.outdated.as_deref() {
            Some(value) => value.parse::<Outdated>()?,
            None => Outdated::default(),
        };
        let sort_by = match self.sort_by.as_deref() {
            Some(value) if !value.is_empty() => value.parse::<SortBy>()?,
            _ => config.search.sort_by,
        };
        let sort_order = match self.sort_order.as_deref() {
            Some(value) if !value.is_empty() => value.parse::<SortOrder>()?,
            _ => config.search.sort_order,
        };

        Ok(SearchQuery::new(query, query_by.parse::<SearchBy>()?)
            .page(self.page.unwrap_or(0))
            .outdated(outdated)
            .sort_by(sort_by)
            .sort_order(sort_order)
            .per_page(self.per_page.filter(|n| *n > 0).unwrap_or(config.search.per_page))
            .only_orphans(self.only_orphans))
    }
}

fn usage_error(message: &str) -> ! {
    println!("Error: {message}");
    std::process::exit(1);
}

fn report_error(error: &PurError) -> ! {
    if std::io::stderr().is_terminal() {
        eprintln!("{}", format_error_with_color(error, true));
    } else {
        eprintln!("{}", format_error_chain(error));
    }
    std::process::exit(get_exit_code(error));
}

fn main() {
    if std::env::args_os().len() == 1 {
        usage_error("No arguments were specified.");
    }

    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    if cli.usage {
        print!("{USAGE}");
        return;
    }

    let query = match cli.query.as_deref() {
        Some(query) if !query.is_empty() => query,
        _ => usage_error("--query is missing."),
    };

    let config = match new_pur_config() {
        Ok(config) => config,
        Err(e) => report_error(&e),
    };

    let result: Result<()> = (|| {
        if cli.suggestions {
            let command = SuggestCommand::new(&config)?;
            return command.execute(query);
        }

        let query_by = match cli.query_by.as_deref() {
            Some(query_by) if !query_by.is_empty() => query_by,
            _ => usage_error("--query-by is missing."),
        };

        let search_query = cli.search_query(query, query_by, &config)?;

        let Some(action) = cli.action() else {
            usage_error("No action type was specified.");
        };

        let command = SearchCommand::new(&config)?.numbered(cli.line_numbers);
        command.execute(&search_query, action)
    })();

    if let Err(e) = result {
        report_error(&e);
    }
}
