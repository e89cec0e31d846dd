//! Storage layer for Parking Core.
//!
//! Tickets live in a single SQLite table accessed by key only, via SQLx.

mod models;
mod repository;

pub use repository::TicketRepository;

#[cfg(test)]
pub(crate) use repository::setup_test_repository;
