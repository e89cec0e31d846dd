//! Ticket domain type.
//!
//! A ticket binds a vehicle plate and a parking lot to the moment the
//! vehicle entered.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A parking ticket. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Short numeric identifier, primary key in the store.
    pub ticket_id: String,

    /// Lot the vehicle entered.
    pub parking_lot: String,

    /// Vehicle plate.
    pub plate: String,

    /// Entry time, whole seconds since the Unix epoch.
    pub parking_posix_time: i64,
}

impl Ticket {
    /// Issue a ticket for a vehicle entering at `parking_posix_time`.
    pub fn new(
        ticket_id: impl Into<String>,
        parking_lot: impl Into<String>,
        plate: impl Into<String>,
        parking_posix_time: i64,
    ) -> Self {
        Self {
            ticket_id: ticket_id.into(),
            parking_lot: parking_lot.into(),
            plate: plate.into(),
            parking_posix_time,
        }
    }

    /// Whole seconds parked as of `now`. Never negative.
    pub fn parked_seconds(&self, now: i64) -> i64 {
        now.saturating_sub(self.parking_posix_time).max(0)
    }
}
