//! Ticket lifecycle and billing engine for Parking Core.
//!
//! - Billing: tariff and slot arithmetic
//! - Clock: time source for entry and exit
//! - Ids: ticket id generation
//! - Desk: issues tickets on entry, prices them on exit

mod billing;
mod clock;
mod desk;
mod ids;

pub use billing::*;
pub use clock::*;
pub use desk::*;
pub use ids::*;
