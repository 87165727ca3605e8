use serde::Serialize;

/// Round lifecycle phase.
///
/// BETTING accepts bet and readiness updates while the countdown runs.
/// SPINNING locks the table: an outcome has been drawn and settled, and the
/// display window is in progress. There are no other phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Betting,
    Spinning,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Betting => "BETTING",
            Phase::Spinning => "SPINNING",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_wire_values() {
        assert_eq!(Phase::Betting.as_str(), "BETTING");
        assert_eq!(Phase::Spinning.as_str(), "SPINNING");
    }
}
