use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{instrument, Level};

use crate::{
    config::Source,
    error::{Error, Result},
};

pub fn make_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .build()
        .map_err(From::from)
}

/// Retrieves the raw markup of a source's menu page.
pub trait PageFetcher {
    async fn fetch(&self, source: &Source) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(skip(self, source), fields(
        source = %source.name,
        url = %source.url,
    ), level = Level::TRACE)]
    async fn fetch(&self, source: &Source) -> Result<String> {
        let mut request = self.client.get(source.url.clone());
        for (name, value) in &source.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let start = std::time::Instant::now();
        let response = request.send().await?;
        if response.status() != StatusCode::OK {
            return Err(Error::Status(response.status()));
        }
        let text = response.text().await?;
        log::trace!("Got text of {} in \t {:?}", source.name, start.elapsed());
        Ok(text)
    }
}
