use crate::{
    error::Result,
    parse::{self, Layout, Slot},
    weekday::Weekday,
};

pub const WEEKLY_COLUMNS_TEMPLATE: &str = "__**Mensa JKU Linz - {weekday}**__
**Menü Classic 1**
{menu_classic_1}
**Menü Classic 2**
{menu_classic_2}
**Tagesteller**
{daily_plate}";

pub const CURRENT_MENU_TEMPLATE: &str = "__**Raab Mensa - {weekday}**__
**Menü 1**
{menu_1}
**Menü 2**
{menu_2}";

/// Fills `{weekday}` and one placeholder per slot of `layout` into `template`.
/// Inserted text is never scanned for placeholders again.
pub fn compose(
    template: &str,
    layout: Layout,
    day: Weekday,
    sections: &[(Slot, String)],
) -> Result<String> {
    let mut values: Vec<(&str, &str)> = vec![("weekday", day.name())];
    for &slot in layout.slots() {
        let (_, text) = sections
            .iter()
            .find(|(s, _)| *s == slot)
            .ok_or_else(|| parse::Error::Internal(format!("no section for slot {slot}")))?;
        values.push((slot.key(), text.as_str()));
    }

    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        message.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after.find('}').and_then(|end| {
            values
                .iter()
                .find(|(key, _)| *key == &after[..end])
                .map(|(_, text)| (end, *text))
        });
        match value {
            Some((end, text)) => {
                message.push_str(text);
                rest = &after[end + 1..];
            }
            None => {
                message.push('{');
                rest = after;
            }
        }
    }
    message.push_str(rest);
    Ok(message)
}

pub fn closed_notice(day: Weekday) -> String {
    format!("Die Mensa hat heute ({day}) geschlossen.")
}
