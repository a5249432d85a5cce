use std::fmt;

/// Direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// `+`: higher raw value is better
    Benefit,
    /// `-`: lower raw value is better
    Cost,
}

impl Impact {
    /// Parse a single impact token. Only the exact strings `+` and `-` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Impact::Benefit => '+',
            Impact::Cost => '-',
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One non-negative multiplier per criterion column.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// One impact direction per criterion column.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }
}

/// Split a comma-separated configuration string into raw tokens.
///
/// An empty string yields one empty token, so `""` counts as one entry and
/// fails later at the parse step rather than the count step.
pub fn split_tokens(s: &str) -> Vec<&str> {
    s.split(',').collect()
}

/// Parse one weight token: surrounding whitespace is ignored, the value must be
/// a finite number `>= 0`.
pub fn parse_weight(token: &str) -> Option<f64> {
    let value: f64 = token.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_parse() {
        assert_eq!(Impact::parse("+"), Some(Impact::Benefit));
        assert_eq!(Impact::parse("-"), Some(Impact::Cost));
        assert_eq!(Impact::parse("*"), None);
        assert_eq!(Impact::parse(" +"), None);
        assert_eq!(Impact::parse(""), None);
    }

    #[test]
    fn test_impact_display() {
        assert_eq!(Impact::Benefit.to_string(), "+");
        assert_eq!(Impact::Cost.to_string(), "-");
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("1,2,3"), vec!["1", "2", "3"]);
        assert_eq!(split_tokens(""), vec![""]);
        assert_eq!(split_tokens("1,,2"), vec!["1", "", "2"]);
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("1"), Some(1.0));
        assert_eq!(parse_weight(" 0.25 "), Some(0.25));
        assert_eq!(parse_weight("0"), Some(0.0));
        assert_eq!(parse_weight("1e2"), Some(100.0));
        assert_eq!(parse_weight("-1"), None);
        assert_eq!(parse_weight("abc"), None);
        assert_eq!(parse_weight("inf"), None);
        assert_eq!(parse_weight("NaN"), None);
        assert_eq!(parse_weight(""), None);
    }
}
