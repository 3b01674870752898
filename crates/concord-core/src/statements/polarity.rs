use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Direction of change of an event. Unknown polarity is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Whether `specific` is compatible with `general`: equal, or `general` unknown.
    pub fn compatible(specific: Option<Polarity>, general: Option<Polarity>) -> bool {
        match general {
            None => true,
            Some(g) => specific == Some(g),
        }
    }
}

impl Mul for Polarity {
    type Output = Polarity;

    /// Sign product: equal polarities give `Positive`, differing give `Negative`.
    fn mul(self, rhs: Polarity) -> Polarity {
        if self == rhs {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("+"),
            Self::Negative => f.write_str("-"),
        }
    }
}
