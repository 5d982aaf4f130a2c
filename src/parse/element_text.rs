use super::Error;
use scraper::{ElementRef, Node, Selector};

const BLOCK_ELEMENTS: [&str; 11] = [
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "tr",
];

/// first element matching `selector` below `element`
pub fn select_first<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    label: &str,
) -> Result<ElementRef<'a>, Error> {
    element
        .select(selector)
        .next()
        .ok_or_else(|| Error::LayoutMismatch(format!("No {label} element found.")))
}

/// Concatenates every text node below `element` in document order, turning each `<br>` into a newline.
pub fn text_with_breaks(element: ElementRef) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Like [`text_with_breaks`] but also starts a new line at every block element,
/// then trims each line and drops the empty ones.
pub fn block_text(element: ElementRef) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" || BLOCK_ELEMENTS.contains(&el.name()) => {
                out.push('\n');
            }
            _ => {}
        }
    }
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
