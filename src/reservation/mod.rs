//! Reservation Module
//!
//! A reservation is an accepted offer bound to a registered payment.

pub mod models;
pub mod storage;

pub use models::{OfferAcceptanceRequest, Reservation, ReservationDetails};
pub use storage::{InMemoryReservationStorage, ReservationStorage};
