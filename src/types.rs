//! Card naming tables.
//! Row index selects a `CardColor`, column index selects a `CardValue`; both orders are
//! fixed and spelled out explicitly rather than derived.
use std::fmt;

/// Number of rows in the composite sheet (one per color).
pub const GRID_ROWS: u32 = 4;
/// Number of columns in the composite sheet (one per value).
pub const GRID_COLS: u32 = 14;

/// Output name of the standalone wild draw-four card.
pub const SPECIAL_CARD_FILE: &str = "wild_draw4.png";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl CardColor {
    /// Colors in sheet row order.
    pub const ALL: [CardColor; GRID_ROWS as usize] = [
        CardColor::Red,
        CardColor::Yellow,
        CardColor::Green,
        CardColor::Blue,
    ];

    pub fn from_row(row: u32) -> Option<Self> {
        Self::ALL.get(row as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Yellow => "yellow",
            CardColor::Green => "green",
            CardColor::Blue => "blue",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum CardValue {
    Number(u8),
    Skip,
    Reverse,
    Draw2,
    Wild,
}

impl CardValue {
    /// Values in sheet column order.
    pub const ALL: [CardValue; GRID_COLS as usize] = [
        CardValue::Number(0),
        CardValue::Number(1),
        CardValue::Number(2),
        CardValue::Number(3),
        CardValue::Number(4),
        CardValue::Number(5),
        CardValue::Number(6),
        CardValue::Number(7),
        CardValue::Number(8),
        CardValue::Number(9),
        CardValue::Skip,
        CardValue::Reverse,
        CardValue::Draw2,
        CardValue::Wild,
    ];

    pub fn from_col(col: u32) -> Option<Self> {
        Self::ALL.get(col as usize).copied()
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardValue::Number(n) => write!(f, "{}", n),
            CardValue::Skip => write!(f, "skip"),
            CardValue::Reverse => write!(f, "reverse"),
            CardValue::Draw2 => write!(f, "draw2"),
            CardValue::Wild => write!(f, "wild"),
        }
    }
}

/// Name of one card cut from the grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CardName {
    pub color: CardColor,
    pub value: CardValue,
}

impl CardName {
    /// Card at grid position (`row`, `col`), or `None` outside the 4x14 grid.
    pub fn grid(row: u32, col: u32) -> Option<Self> {
        Some(Self {
            color: CardColor::from_row(row)?,
            value: CardValue::from_col(col)?,
        })
    }

    /// Every grid card in sheet order: row-major, colors outer, values inner.
    pub fn all() -> impl Iterator<Item = CardName> {
        CardColor::ALL.into_iter().flat_map(|color| {
            CardValue::ALL
                .into_iter()
                .map(move |value| CardName { color, value })
        })
    }

    /// `{color}_{value}.png`
    pub fn file_name(&self) -> String {
        format!("{self}.png")
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.color, self.value)
    }
}
