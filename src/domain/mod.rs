//! Domain types for Parking Core.

mod ticket;

pub use ticket::*;
