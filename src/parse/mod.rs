mod collapse_line_breaks;
mod current_menu;
mod element_text;
mod error;
mod normalize;
mod slot;
mod static_selector;
mod weekly_columns;

pub use error::Error;
pub use normalize::normalize;
pub use slot::Slot;

use scraper::Html;

use crate::weekday::Weekday;
use weekly_columns::WeeklyColumns;

/// Markup layout of a menu page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Whole week in two columns, items keyed by weekday.
    WeeklyColumns,
    /// One block with today's menus.
    CurrentMenu,
}

impl Layout {
    /// Slots this layout fills, in the order they are extracted.
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::WeeklyColumns => &[Slot::MenuClassic1, Slot::MenuClassic2, Slot::DailyPlate],
            Self::CurrentMenu => &[Slot::Menu1, Slot::Menu2],
        }
    }
}

/// Parses `html` and returns the normalized text for every slot of `layout`.
pub fn menu_sections(layout: Layout, html: &str, day: Weekday) -> Result<Vec<(Slot, String)>, Error> {
    let document = Html::parse_document(html);
    let raw = match layout {
        Layout::WeeklyColumns => {
            WeeklyColumns::from_html_element(document.root_element(), day)?.into_sections()
        }
        Layout::CurrentMenu => current_menu::sections_from_html_element(document.root_element())?,
    };
    Ok(raw
        .into_iter()
        .map(|(slot, text)| {
            let normalized = normalize(slot, &text);
            (slot, normalized)
        })
        .collect())
}
