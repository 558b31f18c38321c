use crate::api::client::AurClient;
use crate::api::query::SuggestQuery;
use crate::config::PurConfig;
use crate::error::Result;
use crate::formatter::render_lines;
use log::info;

pub struct SuggestCommand {
    client: AurClient,
}

impl SuggestCommand {
    pub fn new(config: &PurConfig) -> Result<Self> {
        Ok(Self::with_client(AurClient::from_config(config)))
    }

    pub fn with_client(client: AurClient) -> Self {
        Self { client }
    }

    pub fn execute(&self, arg: &str) -> Result<()> {
        println!("{}", self.run(arg)?);
        Ok(())
    }

    /// One suggestion per line, in the order the endpoint returned them.
    pub fn run(&self, arg: &str) -> Result<String> {
        info!("Fetching suggestions for '{arg}'");
        let suggestions = self.client.fetch_suggestions(&SuggestQuery::new(arg))?;
        Ok(render_lines(&suggestions))
    }
}
