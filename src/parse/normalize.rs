//! Turns raw section text into the quoted block that ends up in the chat message.
use super::Slot;

/// Sub-heading that introduces each dish inside the daily plate section.
const DAILY_DISH_TOKEN: &str = "Tagesgericht";

/// Splits at the first `delimiter`; the tail is `None` when the delimiter does not occur.
pub fn split_once<'a>(text: &'a str, delimiter: &str) -> (&'a str, Option<&'a str>) {
    match text.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (text, None),
    }
}

/// Drops the label line in front of the content. `None` if nothing is left.
pub fn strip_title(raw: &str) -> Option<&str> {
    let (_title, content) = split_once(raw, "\n");
    content.map(str::trim).filter(|content| !content.is_empty())
}

/// Reformats the daily plate content into one bold label plus a single body line per dish.
pub fn reformat_daily_plate(content: &str) -> String {
    let separator = format!("\n{DAILY_DISH_TOKEN}");
    let mut out = String::new();
    for (i, fragment) in content.split(separator.as_str()).enumerate() {
        let fragment = if i == 0 {
            fragment.to_owned()
        } else {
            format!("{DAILY_DISH_TOKEN}{fragment}")
        };
        let (label, body) = split_once(&fragment, "\n");
        let body = body.unwrap_or_default().replace('\n', " ");
        out.push_str(&format!("**{}**\n", label.trim()));
        let body = body.trim();
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
    }
    out
}

/// Prefixes every line with `> `.
pub fn quote(text: &str) -> String {
    format!("> {}", text.trim_end().replace('\n', "\n> "))
}

/// Full pipeline for one extracted section.
pub fn normalize(slot: Slot, raw: &str) -> String {
    let content = match strip_title(raw) {
        Some(content) if slot == Slot::DailyPlate => reformat_daily_plate(content),
        Some(content) => content.to_owned(),
        None => slot.placeholder().to_owned(),
    };
    quote(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_once() {
        assert_eq!(split_once("a\nb\nc", "\n"), ("a", Some("b\nc")));
        assert_eq!(split_once("abc", "\n"), ("abc", None));
        assert_eq!(split_once("x MENU 1 y", "MENU 1"), ("x ", Some(" y")));
    }

    #[test]
    fn test_strip_title() {
        assert_eq!(strip_title("Title\nActual content"), Some("Actual content"));
        assert_eq!(strip_title("Title only"), None);
        assert_eq!(strip_title("Title\n   \n"), None);
    }

    #[test]
    fn test_placeholder_when_title_only() {
        assert_eq!(normalize(Slot::Menu1, "MENU 1"), "> Kein Menü 1 verfügbar");
        assert_eq!(
            normalize(Slot::DailyPlate, "Tagesteller\n"),
            "> Kein Tagesteller verfügbar"
        );
    }

    #[test]
    fn test_reformat_daily_plate() {
        let out = reformat_daily_plate("Tagesgericht A\nBody A\nTagesgericht B\nBody B");
        assert_eq!(out, "**Tagesgericht A**\nBody A\n**Tagesgericht B**\nBody B\n");
    }

    #[test]
    fn test_reformat_daily_plate_collapses_body() {
        let out = reformat_daily_plate(
            "Tagesgericht 1\nGemüselaibchen\nmit Reis\nTagesgericht 2\nPutengeschnetzeltes\nmit Nudeln  ",
        );
        assert_eq!(
            out,
            "**Tagesgericht 1**\nGemüselaibchen mit Reis\n**Tagesgericht 2**\nPutengeschnetzeltes mit Nudeln\n"
        );
        let a = out.find("Tagesgericht 1").unwrap();
        let b = out.find("Tagesgericht 2").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("line1\nline2"), "> line1\n> line2");
        assert_eq!(quote("single\n\n"), "> single");
    }

    #[test]
    fn test_normalize_daily_plate() {
        let raw = "Tagesteller\nTagesgericht A\nBody A\nTagesgericht B\nBody B";
        assert_eq!(
            normalize(Slot::DailyPlate, raw),
            "> **Tagesgericht A**\n> Body A\n> **Tagesgericht B**\n> Body B"
        );
    }

    #[test]
    fn test_normalize_placeholder_is_idempotent() {
        for slot in [Slot::MenuClassic1, Slot::DailyPlate, Slot::Menu2] {
            let once = normalize(slot, "just a title");
            assert_eq!(normalize(slot, &once), once);
        }
    }
}
