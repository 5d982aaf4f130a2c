use std::path::Path;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::Serialize;
use tokio::fs;
use url::Url;

use crate::{
    config::Hooks,
    error::{Error, Result},
};

#[derive(Debug, Serialize)]
struct WebhookMessage<'a> {
    content: &'a str,
}

/// Webhook urls carry their token in the path, so logs only get the host.
fn redacted(hook: &Url) -> &str {
    hook.host_str().unwrap_or("<no host>")
}

pub async fn load_hooks(hooks: &Hooks) -> Result<Vec<Url>> {
    match hooks {
        Hooks::Single(url) => Ok(vec![url.clone()]),
        Hooks::File(path) => load_hooks_file(path).await,
    }
}

/// Reads one webhook url per line, skipping blank lines.
pub async fn load_hooks_file(path: impl AsRef<Path>) -> Result<Vec<Url>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).await.map_err(|e| {
        Error::config_error(format!("Failed to load hooks from {}: {e}", path.display()))
    })?;
    let hooks = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            Url::parse(line).map_err(|e| {
                Error::config_error(format!("Invalid webhook url in {}: {e}", path.display()))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    if hooks.is_empty() {
        return Err(Error::config_error(format!(
            "{} does not contain any webhook",
            path.display()
        )));
    }
    Ok(hooks)
}

pub async fn send_message(client: &Client, hook: &Url, message: &str) -> Result<StatusCode> {
    let body = serde_json::to_string(&WebhookMessage { content: message })?;
    let response = client
        .post(hook.clone())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    Ok(response.status())
}

/// Sends `message` to every hook; failures are logged and skipped. Returns the number of failed deliveries.
pub async fn deliver(client: &Client, hooks: &[Url], message: &str) -> usize {
    let mut failed = 0;
    for hook in hooks {
        match send_message(client, hook, message).await {
            Ok(status) if status.is_success() => {
                log::info!("Delivered menu to {} ({status})", redacted(hook));
            }
            Ok(status) => {
                failed += 1;
                log::warn!("Webhook at {} answered {status}", redacted(hook));
            }
            Err(e) => {
                failed += 1;
                log::error!("Failed to deliver menu to {}: {e}", redacted(hook));
            }
        }
    }
    failed
}
