use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How well the WiFi works at a location, as reported by a user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strength {
    Good,
    Unstable,
    Down,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Good, Strength::Unstable, Strength::Down];

    /// Numeric rating sent to the backend.
    pub fn rating(self) -> u8 {
        match self {
            Strength::Good => 1,
            Strength::Unstable => 2,
            Strength::Down => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Good => "Good",
            Strength::Unstable => "Unstable",
            Strength::Down => "Down",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength label: {0:?}")]
pub struct UnknownStrength(pub String);

impl FromStr for Strength {
    type Err = UnknownStrength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strength::ALL
            .into_iter()
            .find(|strength| strength.label() == s)
            .ok_or_else(|| UnknownStrength(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_to_ratings() {
        assert_eq!("Good".parse::<Strength>().map(Strength::rating), Ok(1));
        assert_eq!("Unstable".parse::<Strength>().map(Strength::rating), Ok(2));
        assert_eq!("Down".parse::<Strength>().map(Strength::rating), Ok(3));
    }

    #[test]
    fn parsing_is_exact() {
        assert!("good".parse::<Strength>().is_err());
        assert!("".parse::<Strength>().is_err());
        assert_eq!(
            "Slow".parse::<Strength>(),
            Err(UnknownStrength("Slow".to_string()))
        );
    }
}
