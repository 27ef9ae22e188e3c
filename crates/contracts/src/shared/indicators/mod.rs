use serde::{Deserialize, Serialize};

/// How a card value is rendered on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
}

/// Visual status of a card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}

impl IndicatorStatus {
    /// Status for a period-over-period ratio: growth is good, decline is bad,
    /// a missing comparison base is neutral.
    pub fn from_delta(delta: Option<f64>) -> Self {
        match delta {
            Some(d) if d > 0.0 => IndicatorStatus::Good,
            Some(d) if d < 0.0 => IndicatorStatus::Bad,
            _ => IndicatorStatus::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_delta() {
        assert_eq!(IndicatorStatus::from_delta(Some(0.12)), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_delta(Some(-0.05)), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::from_delta(Some(0.0)), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::from_delta(None), IndicatorStatus::Neutral);
    }
}
