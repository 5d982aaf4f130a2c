use std::{env, path::PathBuf, time::Duration};

use url::Url;

use crate::{
    compose::{CURRENT_MENU_TEMPLATE, WEEKLY_COLUMNS_TEMPLATE},
    error::{Error, Result},
    parse::Layout,
    weekday::Weekday,
};

pub const DEFAULT_HOOKS_FILE: &str = "mensen.txt";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A menu website together with how to request and render it.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub layout: Layout,
    pub template: String,
}

impl Source {
    pub fn jku_linz() -> Self {
        Self {
            name: "Mensa JKU Linz".to_string(),
            url: Url::parse("https://www.mensen.at/").expect("source url should be valid"),
            // selects the JKU Linz location on mensen.at
            headers: vec![("Cookie".to_string(), "mensenExtLocation=1".to_string())],
            layout: Layout::WeeklyColumns,
            template: WEEKLY_COLUMNS_TEMPLATE.to_string(),
        }
    }

    pub fn raab() -> Self {
        Self {
            name: "Raab Mensa".to_string(),
            url: Url::parse("https://www.mittag.at/r/raabmensa")
                .expect("source url should be valid"),
            headers: Vec::new(),
            layout: Layout::CurrentMenu,
            template: CURRENT_MENU_TEMPLATE.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClosedDayPolicy {
    /// Send a "closed today" message.
    #[default]
    Notify,
    /// Exit without sending anything.
    Silent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hooks {
    /// Single webhook url from `DAILY_MENSA_WEBHOOK_URL`.
    Single(Url),
    /// File with one webhook url per line.
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub hooks: Hooks,
    pub timeout: Duration,
    pub closed_day: ClosedDayPolicy,
    pub day: Option<Weekday>,
    pub sources: Vec<Source>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let hooks = match lookup("DAILY_MENSA_WEBHOOK_URL") {
            Some(url) => Hooks::Single(Url::parse(url.trim()).map_err(|e| {
                Error::config_error(format!("DAILY_MENSA_WEBHOOK_URL is not a valid url: {e}"))
            })?),
            None => Hooks::File(
                lookup("DAILY_MENSA_HOOKS_FILE")
                    .unwrap_or_else(|| DEFAULT_HOOKS_FILE.to_string())
                    .into(),
            ),
        };

        let timeout = match lookup("DAILY_MENSA_TIMEOUT_SECS") {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => {
                    return Err(Error::config_error(format!(
                        "DAILY_MENSA_TIMEOUT_SECS must be a positive number of seconds, got {secs:?}"
                    )))
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let closed_day = match lookup("DAILY_MENSA_CLOSED_DAY").as_deref().map(str::trim) {
            None | Some("notify") => ClosedDayPolicy::Notify,
            Some("silent") => ClosedDayPolicy::Silent,
            Some(other) => {
                return Err(Error::config_error(format!(
                    "DAILY_MENSA_CLOSED_DAY must be `notify` or `silent`, got {other:?}"
                )))
            }
        };

        let day = match lookup("DAILY_MENSA_DAY") {
            Some(day) => {
                let ordinal: i64 = day.trim().parse().map_err(|_| {
                    Error::config_error(format!("DAILY_MENSA_DAY must be a number, got {day:?}"))
                })?;
                Some(Weekday::new(ordinal)?)
            }
            None => None,
        };

        Ok(Self {
            hooks,
            timeout,
            closed_day,
            day,
            sources: vec![Source::jku_linz(), Source::raab()],
        })
    }

    /// The configured weekday override, or today.
    pub fn weekday(&self) -> Weekday {
        self.day.unwrap_or_else(Weekday::today)
    }
}
