use std::fmt::{self, Display, Formatter};

/// A named offering in a source's message template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    MenuClassic1,
    MenuClassic2,
    DailyPlate,
    Menu1,
    Menu2,
}

impl Slot {
    /// Placeholder name used in message templates, e.g. `{menu_classic_1}`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MenuClassic1 => "menu_classic_1",
            Self::MenuClassic2 => "menu_classic_2",
            Self::DailyPlate => "daily_plate",
            Self::Menu1 => "menu_1",
            Self::Menu2 => "menu_2",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::MenuClassic1 => "Menü Classic 1",
            Self::MenuClassic2 => "Menü Classic 2",
            Self::DailyPlate => "Tagesteller",
            Self::Menu1 => "Menü 1",
            Self::Menu2 => "Menü 2",
        }
    }

    /// Shown instead of the dishes when the page has nothing for this slot.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::MenuClassic1 => "Kein Menü Classic 1 verfügbar",
            Self::MenuClassic2 => "Kein Menü Classic 2 verfügbar",
            Self::DailyPlate => "Kein Tagesteller verfügbar",
            Self::Menu1 => "Kein Menü 1 verfügbar",
            Self::Menu2 => "Kein Menü 2 verfügbar",
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
