use std::fmt::{self, Display, Formatter};

/// A named input socket on a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Red,
    Green,
    Blue,
    Colour1,
    Colour2,
    Ratio,
    Value,
}

impl Slot {
    /// Returns the name the editor uses for the slot.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Colour1 => "COLOUR1",
            Self::Colour2 => "COLOUR2",
            Self::Ratio => "RATIO",
            Self::Value => "VALUE",
        }
    }
}

impl Display for Slot {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}
