#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Scrapes today's mensa menus and posts them to chat webhooks. Meant to be run once a day by cron.

mod compose;
mod config;
mod error;
mod fetch;
mod orchestrate;
mod parse;
mod webhook;
mod weekday;

use std::process::ExitCode;

use crate::{
    config::Config,
    fetch::{make_client, HttpFetcher},
};

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<u8> {
    let config = Config::from_env()?;
    let client = make_client(config.timeout)?;
    let fetcher = HttpFetcher::new(client.clone());
    orchestrate::run(&config, &fetcher, &client).await
}
