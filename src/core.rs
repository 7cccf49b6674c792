//! Core types used in the description of warehouse transactions.

use serde::Serialize;

/// Fruits are identified by their name, taken verbatim from the input. No normalization happens:
/// `apple` and `Apple` are two different fruits.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fruit(pub String);

impl std::fmt::Display for Fruit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Fruit {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Fruit {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Quantities are plain signed integers. Nothing is checked about their range or sign at this
/// level: a negative supply is a perfectly valid [Quantity] as far as parsing is concerned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(pub i32);

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for Quantity {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quantity_accepts_signs() {
        assert_eq!("+7".parse::<Quantity>(), Ok(Quantity(7)));
        assert_eq!("-5".parse::<Quantity>(), Ok(Quantity(-5)));
    }

    #[test]
    fn quantity_rejects_non_integers() {
        for input in ["", " 1", "1 ", "1.0", "1,000", "20word", "2147483648"] {
            assert!(input.parse::<Quantity>().is_err(), "{:?} should not parse", input);
        }
    }

    #[test]
    fn fruit_is_case_sensitive() {
        assert_ne!(Fruit::from("apple"), Fruit::from("Apple"));
    }
}
