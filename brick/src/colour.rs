//! Colour values as computed by the generated helpers.
//!
//! Rounding is half to even so that results agree with Python's `round`.

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Colour {
    red: u8,
    green: u8,
    blue: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses a `#RRGGBB` string. Hex digits may be in either case.
    pub fn parse(string: &str) -> Option<Self> {
        let digits = string.strip_prefix('#')?;

        if digits.len() != 6 || !digits.chars().all(|char| char.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();

        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Composes a colour from channels in the range of 0 to 1. Channels out of
    /// the range are clamped.
    pub fn from_unit_channels(red: f64, green: f64, blue: f64) -> Self {
        let channel = |value: f64| round(clamp_unit(value) * 255.0);

        Self::new(channel(red), channel(green), channel(blue))
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Interpolates linearly towards `other`. A ratio of 0 gives `self` and 1
    /// gives `other`.
    pub fn blend(&self, other: &Self, ratio: f64) -> Self {
        let ratio = clamp_unit(ratio);
        let channel =
            |one: u8, other: u8| round(f64::from(one) * (1.0 - ratio) + f64::from(other) * ratio);

        Self::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
        )
    }
}

impl Display for Colour {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "#{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue
        )
    }
}

// `min(1, max(0, x))` in Python maps NaN to 0.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn round(value: f64) -> u8 {
    value.round_ties_even() as u8
}
