use scraper::ElementRef;

use super::{
    collapse_line_breaks::collapse_line_breaks,
    element_text::{select_first, text_with_breaks},
    normalize::split_once,
    Error, Slot,
};
use crate::static_selector;

/// Single block that always shows today's two menus, separated by `MENU 1` / `MENU 2` labels.
pub fn sections_from_html_element(element: ElementRef) -> Result<Vec<(Slot, String)>, Error> {
    static_selector!(CURRENT_MENU_SELECTOR <- "div.current-menu");
    let menu = select_first(&CURRENT_MENU_SELECTOR, element, "current-menu")?;
    let text = text_with_breaks(menu);
    let text = collapse_line_breaks(&text);

    let (_, Some(rest)) = split_once(&text, "MENU 1") else {
        return Err(Error::layout_mismatch("No `MENU 1` label in the current menu."));
    };
    let (menu_1, Some(menu_2)) = split_once(rest, "MENU 2") else {
        return Err(Error::layout_mismatch("No `MENU 2` label in the current menu."));
    };
    Ok(vec![
        (Slot::Menu1, menu_1.to_owned()),
        (Slot::Menu2, menu_2.to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_sections_from_html_element() {
        let html = fs::read_to_string("./src/parse/html_examples/current_menu.html").unwrap();
        let document = scraper::Html::parse_document(&html);
        let sections = sections_from_html_element(document.root_element())
            .expect("The example html should be valid");
        assert_eq!(
            sections,
            vec![
                (
                    Slot::Menu1,
                    " € 6,90\nFrittatensuppe\nSchweinsbraten mit Semmelknödel\n".to_owned()
                ),
                (
                    Slot::Menu2,
                    " € 6,50\nFrittatensuppe\nGemüsestrudel mit Kräuterdip\n".to_owned()
                ),
            ]
        );
    }

    #[test]
    fn test_missing_second_menu() {
        let document = scraper::Html::parse_document(
            r#"<div class="current-menu">MENU 1<br>Suppe<br>Braten</div>"#,
        );
        let err = sections_from_html_element(document.root_element()).unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch(_)));
    }

    #[test]
    fn test_missing_block() {
        let document = scraper::Html::parse_document("<p>Heute geschlossen</p>");
        let err = sections_from_html_element(document.root_element()).unwrap_err();
        assert!(matches!(err, Error::LayoutMismatch(_)));
    }
}
