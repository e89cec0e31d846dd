//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

// ==================== Tickets ====================

/// Query parameters accepted by the ticket endpoints.
///
/// Entry reads `plate` and `parkingLot`; exit reads `ticketId`. Anything else
/// is ignored, and a repeated key keeps its last value.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TicketQuery {
    /// Vehicle plate (entry).
    #[serde(default)]
    pub plate: Option<String>,
    /// Parking lot identifier (entry).
    #[serde(default)]
    pub parking_lot: Option<String>,
    /// Ticket id printed at entry (exit).
    #[serde(default)]
    pub ticket_id: Option<String>,
}

impl TicketQuery {
    /// Collect the known keys from decoded query pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "plate" => query.plate = Some(value),
                "parkingLot" => query.parking_lot = Some(value),
                "ticketId" => query.ticket_id = Some(value),
                _ => {}
            }
        }
        query
    }
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// Timestamp.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_reads_known_keys() {
        let query = TicketQuery::from_pairs(pairs(&[
            ("plate", "ABC123"),
            ("parkingLot", "L1"),
            ("color", "red"),
        ]));
        assert_eq!(query.plate.as_deref(), Some("ABC123"));
        assert_eq!(query.parking_lot.as_deref(), Some("L1"));
        assert_eq!(query.ticket_id, None);
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let query = TicketQuery::from_pairs(pairs(&[("ticketId", "1"), ("ticketId", "2")]));
        assert_eq!(query.ticket_id.as_deref(), Some("2"));
    }
}
