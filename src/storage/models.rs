//! Database models for Parking Core.
//!
//! These are the row types returned by SQLx queries.

use sqlx::FromRow;

use crate::domain::Ticket;

/// Database row for the tickets table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub ticket_id: String,
    pub parking_lot: String,
    pub plate: String,
    pub parking_posix_time: i64,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            ticket_id: row.ticket_id,
            parking_lot: row.parking_lot,
            plate: row.plate,
            parking_posix_time: row.parking_posix_time,
        }
    }
}
