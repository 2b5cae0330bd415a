//! UTC timestamps recorded on profiling sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point in time, serialized as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_timestamps_order_after_earlier_ones() {
        let started = Timestamp::now();
        let completed = Timestamp::now();
        assert!(started <= completed);
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let ts = Timestamp::now();
        let json = serde_json::to_value(ts).unwrap();

        let raw = json.as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
        assert_eq!(serde_json::from_value::<Timestamp>(json).unwrap(), ts);
    }
}
