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

use crate::error::PurError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a PurError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a PurError) -> Self {
        let (suggestion, details) = match error {
            PurError::ValidationError(msg) => {
                let suggestion = if msg.starts_with("outdated") {
                    Some(
                        "Accepted --outdated values are 'on', 'off' or an empty string."
                            .to_string(),
                    )
                } else {
                    Some("Run 'pur --usage' to see the accepted option values.".to_string())
                };
                let details = Some(format!("Rejected before any request was sent: {msg}"));
                (suggestion, details)
            }
            PurError::NetworkError { status, message } => {
                let suggestion = match status {
                    Some(404) => Some(
                        "The AUR endpoint was not found. Check 'endpoints' in your pur config."
                            .to_string(),
                    ),
                    Some(429) => Some("Too many requests. Wait a moment and try again.".to_string()),
                    Some(500..=599) => {
                        Some("The AUR is having trouble. Please try again later.".to_string())
                    }
                    _ => Some(
                        "Check your internet connection and proxy settings (HTTP_PROXY, \
                         HTTPS_PROXY), then try again."
                            .to_string(),
                    ),
                };
                let details = match status {
                    Some(code) => Some(format!("HTTP status {code}: {message}")),
                    None => Some(message.clone()),
                };
                (suggestion, details)
            }
            PurError::ParseError(msg) => {
                let suggestion = Some(
                    "The AUR page layout may have changed. Try --dump-json with -vvv to inspect \
                     the response."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            PurError::ConfigError(msg) => {
                let suggestion = Some(
                    "Fix or remove config.toml in your pur home ($PUR_HOME or ~/.pur)."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
