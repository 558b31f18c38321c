use crate::api::query::{SearchQuery, SuggestQuery};
use crate::config::PurConfig;
use crate::error::{PurError, Result};
use crate::extract::decode_suggestions;
use crate::user_agent;
use attohttpc::{Session, StatusCode};
use log::{debug, trace};
use std::time::Duration;

pub const AUR_SEARCH_URL: &str = "https://aur.archlinux.org/packages";
pub const AUR_RPC_URL: &str = "https://aur.archlinux.org/rpc";
/// RPC protocol version sent with every suggestion request.
pub const RPC_VERSION: u32 = 5;
const DEFAULT_TIMEOUT: u64 = 30;

#[derive(Debug, Clone)]
pub struct AurClient {
    pub(crate) session: Session,
    pub(crate) search_url: String,
    pub(crate) rpc_url: String,
}

impl AurClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::search_client());
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT));
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            search_url: AUR_SEARCH_URL.to_string(),
            rpc_url: AUR_RPC_URL.to_string(),
        }
    }

    pub fn from_config(config: &PurConfig) -> Self {
        Self::new()
            .with_search_url(config.endpoints.search_url.clone())
            .with_rpc_url(config.endpoints.rpc_url.clone())
            .with_timeout(Duration::from_secs(config.http.timeout_secs))
    }

    pub fn with_search_url(mut self, search_url: String) -> Self {
        self.search_url = search_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_rpc_url(mut self, rpc_url: String) -> Self {
        self.rpc_url = rpc_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    /// Build the search page URL. Parameter order is fixed and the keyword is
    /// percent-encoded.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}?O={}&SeB={}&K={}&outdated={}&SB={}&SO={}&PP={}&submit={}",
            self.search_url,
            query.page,
            query.search_by.as_param(),
            urlencoding::encode(&query.query),
            query.outdated.as_param(),
            query.sort_by.as_param(),
            query.sort_order.as_param(),
            query.per_page,
            query.submit_label()
        )
    }

    pub fn suggest_url(&self, query: &SuggestQuery) -> String {
        format!(
            "{}?v={RPC_VERSION}&type=suggest&arg={}",
            self.rpc_url,
            urlencoding::encode(&query.arg)
        )
    }

    /// Fetch the raw HTML of one search results page.
    pub fn fetch_search_page(&self, query: &SearchQuery) -> Result<String> {
        let url = self.search_url(query);
        self.get_text(&url, user_agent::search_client())
    }

    pub fn fetch_suggestions(&self, query: &SuggestQuery) -> Result<Vec<String>> {
        let url = self.suggest_url(query);
        let body = self.get_text(&url, user_agent::rpc_client())?;
        decode_suggestions(&body)
    }

    fn get_text(&self, url: &str, agent: String) -> Result<String> {
        debug!("GET {url}");

        let response = self
            .session
            .get(url)
            .header("User-Agent", agent)
            .send()
            .map_err(|e| PurError::NetworkError {
                status: None,
                message: format!("Failed to connect to {url}: {e}"),
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PurError::NetworkError {
                status: Some(status.as_u16()),
                message: format!(
                    "HTTP request failed with status {} ({})",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
            });
        }

        let body = response.text().map_err(|e| PurError::NetworkError {
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {e}"),
        })?;

        debug!("Received {} bytes from {url}", body.len());
        trace!("Response body: {body}");
        Ok(body)
    }
}

impl Default for AurClient {
    fn default() -> Self {
        Self::new()
    }
}
