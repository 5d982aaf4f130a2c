use scraper::{ElementRef, Selector};

use super::{element_text::block_text, Error, Slot};
use crate::{static_selector, weekday::Weekday};

/// Week listing split into a left column (menu classic 1 + daily plate) and a
/// right column (menu classic 2), each holding one item per weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyColumns {
    left: Vec<String>,
    right: Vec<String>,
}

impl WeeklyColumns {
    pub fn from_html_element(element: ElementRef, day: Weekday) -> Result<Self, Error> {
        static_selector!(CATEGORY_SELECTOR <- "div.menu-category");
        let mut categories = element.select(&CATEGORY_SELECTOR);
        // the page renders the listing twice, the first copy is for small screens
        categories
            .next()
            .ok_or_else(|| Error::layout_mismatch("No menu-category container found."))?;
        let left = categories
            .next()
            .ok_or_else(|| Error::layout_mismatch("Left menu column not found."))?;
        let right = categories
            .next()
            .ok_or_else(|| Error::layout_mismatch("Right menu column not found."))?;

        let item_selector = Selector::parse(&format!("div.menu-item-{}", day.ordinal()))
            .map_err(|e| Error::internal_error(&format!("invalid menu item selector: {e:?}")))?;
        let left = day_items(left, &item_selector, 2, "left")?;
        let right = day_items(right, &item_selector, 1, "right")?;
        Ok(Self { left, right })
    }

    pub fn into_sections(self) -> Vec<(Slot, String)> {
        let mut left = self.left.into_iter();
        let mut right = self.right.into_iter();
        [
            (Slot::MenuClassic1, left.next()),
            (Slot::MenuClassic2, right.next()),
            (Slot::DailyPlate, left.next()),
        ]
        .into_iter()
        .filter_map(|(slot, text)| Some((slot, text?)))
        .collect()
    }
}

/// Texts of the first `expected` items for the day inside the column's first child container.
fn day_items(
    column: ElementRef,
    items: &Selector,
    expected: usize,
    label: &str,
) -> Result<Vec<String>, Error> {
    let content = column
        .children()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| Error::LayoutMismatch(format!("The {label} menu column is empty.")))?;
    let found: Vec<String> = content.select(items).take(expected).map(block_text).collect();
    if found.len() < expected {
        return Err(Error::LayoutMismatch(format!(
            "Expected {expected} items for today in the {label} menu column but found {}.",
            found.len()
        )));
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> scraper::Html {
        let html =
            fs::read_to_string("./src/parse/html_examples/weekly_columns.html").unwrap();
        scraper::Html::parse_document(&html)
    }

    #[test]
    fn test_from_html_element() {
        let document = fixture();
        let columns =
            WeeklyColumns::from_html_element(document.root_element(), Weekday::new(3).unwrap())
                .expect("The example html should be valid");
        assert_eq!(columns.left.len(), 2);
        assert_eq!(columns.right.len(), 1);
        assert_eq!(
            columns.left[0],
            "Menü Classic 1\nKarottencremesuppe\nWiener Schnitzel mit Petersilkartoffeln"
        );
        assert_eq!(
            columns.left[1],
            "Tagesteller\nTagesgericht 1\nGemüselaibchen\nmit Reis\nTagesgericht 2\nPutengeschnetzeltes\nmit Nudeln"
        );
        assert_eq!(
            columns.right[0],
            "Menü Classic 2\nLinsensuppe\nKäsespätzle mit Röstzwiebeln"
        );
    }

    #[test]
    fn test_slot_order() {
        let document = fixture();
        let sections =
            WeeklyColumns::from_html_element(document.root_element(), Weekday::new(1).unwrap())
                .unwrap()
                .into_sections();
        let slots: Vec<_> = sections.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(
            slots,
            [Slot::MenuClassic1, Slot::MenuClassic2, Slot::DailyPlate]
        );
        assert!(sections[0].1.contains("Faschierter Braten"));
        assert!(sections[1].1.contains("Gemüsecurry"));
        assert!(sections[2].1.contains("Spinatknödel"));
    }

    #[test]
    fn test_ignores_mobile_copy() {
        let document = fixture();
        let columns =
            WeeklyColumns::from_html_element(document.root_element(), Weekday::new(3).unwrap())
                .unwrap();
        assert!(columns
            .into_sections()
            .iter()
            .all(|(_, text)| !text.contains("Mobile Kopie")));
    }

    #[test]
    fn test_missing_day_items() {
        let document = fixture();
        let err =
            WeeklyColumns::from_html_element(document.root_element(), Weekday::new(5).unwrap())
                .unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch(_)));
    }

    #[test]
    fn test_missing_columns() {
        let document = scraper::Html::parse_document(
            r#"<div class="menu-category"><div><div class="menu-item-2">x</div></div></div>"#,
        );
        let err =
            WeeklyColumns::from_html_element(document.root_element(), Weekday::new(2).unwrap())
                .unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch(_)));
    }
}
