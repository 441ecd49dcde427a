//! Reservation persistence.

use super::models::Reservation;
use crate::error::StorageError;
use dashmap::DashMap;
use uuid::Uuid;

/// Stores reservations keyed by id.
pub trait ReservationStorage: Send + Sync {
    fn save(&self, reservation: Reservation) -> Result<(), StorageError>;

    fn load(&self, id: Uuid) -> Result<Option<Reservation>, StorageError>;
}

/// In-memory reservation storage.
#[derive(Debug, Default)]
pub struct InMemoryReservationStorage {
    reservations: DashMap<Uuid, Reservation>,
}

impl InMemoryReservationStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.reservations.len()
    }
}

impl ReservationStorage for InMemoryReservationStorage {
    fn save(&self, reservation: Reservation) -> Result<(), StorageError> {
        self.reservations.insert(reservation.id(), reservation);
        Ok(())
    }

    fn load(&self, id: Uuid) -> Result<Option<Reservation>, StorageError> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }
}
