//! Ticket Desk - runs the ticket lifecycle.
//!
//! Entry issues and stores a ticket; exit looks it up and prices the stay.
//! Tickets are never modified or removed here.

use std::sync::Arc;

use crate::domain::Ticket;
use crate::engine::{whole_minutes, Clock, Tariff, TicketIdSource};
use crate::error::{ParkingError, ParkingResult};
use crate::storage::TicketRepository;

/// Amount owed for a ticket at the moment of exit.
#[derive(Debug, Clone, PartialEq)]
pub struct ExitQuote {
    /// The ticket that was priced.
    pub ticket: Ticket,
    /// Whole minutes parked.
    pub parked_minutes: i64,
    /// Amount to pay.
    pub amount: f64,
}

/// Issues tickets on entry and prices them on exit.
pub struct TicketDesk {
    repository: TicketRepository,
    tariff: Tariff,
    clock: Arc<dyn Clock>,
    ids: Box<dyn TicketIdSource>,
    max_id_attempts: u32,
}

impl TicketDesk {
    /// Create a new desk with the given components.
    pub fn new(
        repository: TicketRepository,
        tariff: Tariff,
        clock: Arc<dyn Clock>,
        ids: Box<dyn TicketIdSource>,
        max_id_attempts: u32,
    ) -> Self {
        Self {
            repository,
            tariff,
            clock,
            ids,
            max_id_attempts,
        }
    }

    /// The store this desk writes to.
    pub fn repository(&self) -> &TicketRepository {
        &self.repository
    }

    /// Issue a ticket for a vehicle entering `parking_lot` now.
    ///
    /// Candidate ids already present in the store are skipped, up to
    /// `max_id_attempts` draws.
    pub async fn issue_ticket(&self, plate: &str, parking_lot: &str) -> ParkingResult<Ticket> {
        let now = self.clock.now();

        for attempt in 1..=self.max_id_attempts {
            let ticket_id = self.ids.next_id();

            if self.repository.ticket_exists(&ticket_id).await? {
                tracing::warn!(
                    ticket_id = %ticket_id,
                    attempt,
                    "Ticket id already taken, drawing another"
                );
                continue;
            }

            let ticket = Ticket::new(ticket_id, parking_lot, plate, now);
            self.repository.save_ticket(&ticket).await?;

            tracing::debug!(
                ticket_id = %ticket.ticket_id,
                parking_posix_time = ticket.parking_posix_time,
                "Ticket stored"
            );

            return Ok(ticket);
        }

        Err(ParkingError::Internal(format!(
            "no free ticket id after {} attempts",
            self.max_id_attempts
        )))
    }

    /// Price the stay of `ticket_id` as of now.
    ///
    /// The store keys tickets by id, so at most one record comes back.
    pub async fn quote_exit(&self, ticket_id: &str) -> ParkingResult<ExitQuote> {
        let ticket = self
            .repository
            .find_tickets(ticket_id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ParkingError::NotFound("Wrong ticketId was given".to_string()))?;

        let parked_seconds = ticket.parked_seconds(self.clock.now());
        let parked_minutes = whole_minutes(parked_seconds);
        let amount = self.tariff.charge_for_seconds(parked_seconds);

        Ok(ExitQuote {
            ticket,
            parked_minutes,
            amount,
        })
    }
}
