use futures::future::join_all;
use reqwest::Client;

use crate::{
    compose::{closed_notice, compose},
    config::{ClosedDayPolicy, Config, Source},
    error::Result,
    fetch::PageFetcher,
    parse, webhook,
    weekday::Weekday,
};

/// The combined message of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub message: String,
    /// Sources that contributed a failure note instead of their menu.
    pub failed_sources: usize,
}

impl Report {
    /// 0 when every source delivered its menu, 1 when at least one failed.
    pub const fn exit_code(&self) -> u8 {
        if self.failed_sources > 0 {
            1
        } else {
            0
        }
    }
}

/// One full run: load the hooks, build the message, deliver it. Returns the process exit code.
pub async fn run<F: PageFetcher>(config: &Config, fetcher: &F, client: &Client) -> Result<u8> {
    let hooks = webhook::load_hooks(&config.hooks).await?;
    let day = config.weekday();
    log::info!("Collecting menus for {day} ({} webhooks)", hooks.len());

    let Some(report) = build_message(fetcher, &config.sources, day, config.closed_day).await
    else {
        log::info!("Nothing to send today");
        return Ok(0);
    };

    let failed = webhook::deliver(client, &hooks, &report.message).await;
    if failed > 0 {
        log::warn!("{failed} of {} webhooks could not be reached", hooks.len());
    }
    Ok(report.exit_code())
}

/// Builds the message for `day`. `None` means there is nothing to send.
pub async fn build_message<F: PageFetcher>(
    fetcher: &F,
    sources: &[Source],
    day: Weekday,
    policy: ClosedDayPolicy,
) -> Option<Report> {
    if !day.is_serving_day() {
        log::info!("Mensa is closed on {day}");
        return match policy {
            ClosedDayPolicy::Notify => Some(Report {
                message: closed_notice(day),
                failed_sources: 0,
            }),
            ClosedDayPolicy::Silent => None,
        };
    }

    // join_all keeps the source order
    let menus = join_all(sources.iter().map(|source| menu_for(fetcher, source, day))).await;
    let mut failed_sources = 0;
    let segments: Vec<String> = sources
        .iter()
        .zip(menus)
        .map(|(source, menu)| {
            menu.unwrap_or_else(|e| {
                failed_sources += 1;
                tracing::warn!("Error while getting the menu of {}: {e}", source.name);
                format!("Failed to get information from {}: {e}", source.name)
            })
        })
        .collect();

    Some(Report {
        message: segments.join("\n\n"),
        failed_sources,
    })
}

async fn menu_for<F: PageFetcher>(fetcher: &F, source: &Source, day: Weekday) -> Result<String> {
    let html = fetcher.fetch(source).await?;
    let sections = parse::menu_sections(source.layout, &html, day)?;
    compose(&source.template, source.layout, day, &sections)
}
