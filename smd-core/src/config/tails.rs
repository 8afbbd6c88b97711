//! Tail convention for converting a p-value to a quantile probability.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which tail(s) of the t-distribution the p-value refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tails {
    /// Significance split across both tails; critical t at `-Q(p/2)`.
    #[default]
    TwoSided,
    /// Upper tail only; critical t at `-Q(p)`.
    OneSided,
}

impl Tails {
    /// Probability mass beyond the critical t-value in one tail.
    ///
    /// The critical value is the negated lower-tail quantile at this
    /// probability, which stays exact where `1 - p/2` would round to 1.
    pub fn tail_probability(&self, p_value: f64) -> f64 {
        match self {
            Self::TwoSided => p_value / 2.0,
            Self::OneSided => p_value,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoSided => "two_sided",
            Self::OneSided => "one_sided",
        }
    }
}

impl fmt::Display for Tails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tails {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two_sided" | "two-sided" | "two" | "2" => Ok(Self::TwoSided),
            "one_sided" | "one-sided" | "one" | "1" => Ok(Self::OneSided),
            other => Err(format!("unknown tail convention: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sided_halves_p() {
        assert_eq!(Tails::TwoSided.tail_probability(0.05), 0.025);
    }

    #[test]
    fn test_one_sided_uses_full_p() {
        assert_eq!(Tails::OneSided.tail_probability(0.05), 0.05);
    }

    #[test]
    fn test_tiny_p_keeps_resolution() {
        let a = Tails::TwoSided.tail_probability(1.49e-15);
        let b = Tails::TwoSided.tail_probability(1.09e-15);
        assert!(a > b);
        assert_eq!(Tails::TwoSided.tail_probability(1e-20), 5e-21);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("two-sided".parse::<Tails>(), Ok(Tails::TwoSided));
        assert_eq!(" ONE_SIDED ".parse::<Tails>(), Ok(Tails::OneSided));
        assert!("both".parse::<Tails>().is_err());
    }

    #[test]
    fn test_default_is_two_sided() {
        assert_eq!(Tails::default(), Tails::TwoSided);
        assert_eq!(Tails::default().to_string(), "two_sided");
    }
}
