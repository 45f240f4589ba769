//! Packet metrics reported by the local packet-forwarder API.
//!
//! The endpoint returns a sparse map of time buckets plus aggregate totals:
//!
//! ```json
//! { "buckets": { "52": {"rx": 3, "tx": 1}, "53": {"rx": 10, "tx": 0} },
//!   "totals":  { "rx_max": 10, "tx_max": 1 } }
//! ```
//!
//! Bucket indices missing from the map carry no traffic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::providers::ProviderError;

/// Raw per-bucket counters as they appear on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    #[serde(default)]
    pub rx: u64,
    #[serde(default)]
    pub tx: u64,
}

/// One time slice of packet activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    /// Position in the window, most recent bucket has the highest index
    pub index: u32,
    /// Received packets
    pub rx_count: u64,
    /// Transmitted packets
    pub tx_count: u64,
}

/// Aggregates over every bucket in the window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Peak receive count of any bucket, used for vertical scaling
    pub rx_max: u64,
    #[serde(default)]
    pub tx_max: u64,
}

/// Snapshot of the metrics endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    #[serde(default)]
    pub buckets: BTreeMap<u32, BucketCounts>,
    pub totals: Totals,
}

impl MetricsSnapshot {
    /// Parse the JSON body of `GET /api/metrics`.
    pub fn from_json(body: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Look up a bucket, treating a missing index as an idle bucket.
    pub fn bucket(&self, index: u32) -> Bucket {
        let counts = self.buckets.get(&index).copied().unwrap_or_default();
        Bucket {
            index,
            rx_count: counts.rx,
            tx_count: counts.tx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_sparse_payload() {
        let snapshot = MetricsSnapshot::from_json(
            r#"{"buckets": {"53": {"rx": 10, "tx": 2}}, "totals": {"rx_max": 10, "tx_max": 2, "rx": 10}}"#,
        )
        .unwrap();

        assert_eq!(snapshot.totals.rx_max, 10);
        assert_eq!(
            snapshot.bucket(53),
            Bucket {
                index: 53,
                rx_count: 10,
                tx_count: 2
            }
        );
    }

    #[test]
    fn test_missing_bucket_is_idle() {
        let snapshot = MetricsSnapshot::from_json(r#"{"buckets": {}, "totals": {"rx_max": 0}}"#)
            .unwrap();
        assert_eq!(
            snapshot.bucket(7),
            Bucket {
                index: 7,
                rx_count: 0,
                tx_count: 0
            }
        );
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        assert!(matches!(
            MetricsSnapshot::from_json("<html>502 Bad Gateway</html>"),
            Err(ProviderError::Malformed(_))
        ));
        assert!(matches!(
            MetricsSnapshot::from_json(r#"{"buckets": {}}"#),
            Err(ProviderError::Malformed(_))
        ));
        assert!(matches!(
            MetricsSnapshot::from_json(r#"{"buckets": {"x": {"rx": 1}}, "totals": {"rx_max": 1}}"#),
            Err(ProviderError::Malformed(_))
        ));
    }
}
