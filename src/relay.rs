//! Single-slot handoff of a "pick to book" selection between pages.
//!
//! The browse pages publish the chosen service or salon; the booking page
//! consumes it once on mount. Reading clears the slot. A value that cannot be
//! parsed is discarded and reads as nothing.

use serde::{Deserialize, Serialize};

use chrono::{NaiveDate, NaiveTime};

use crate::catalog::{Appointment, AppointmentStatus, SalonItem, ServiceItem};
use crate::storage::{self, keys, KeyValueStore, StorageError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "item", rename_all = "lowercase")]
pub enum BookingSelection {
    Service(ServiceItem),
    Salon(SalonItem),
}

impl BookingSelection {
    pub fn name(&self) -> &str {
        match self {
            BookingSelection::Service(service) => &service.name,
            BookingSelection::Salon(salon) => &salon.name,
        }
    }

    /// Upcoming appointment for this selection at the chosen slot.
    /// A salon pick books its first listed service.
    pub fn book(&self, id: String, date: NaiveDate, time: NaiveTime) -> Appointment {
        let (service, location) = match self {
            BookingSelection::Service(service) => {
                (service.name.clone(), DEFAULT_LOCATION.to_string())
            }
            BookingSelection::Salon(salon) => (
                salon
                    .services
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "Atendimento".to_string()),
                salon.name.clone(),
            ),
        };
        Appointment {
            id,
            date,
            time,
            service,
            professional: "A definir".to_string(),
            location,
            status: AppointmentStatus::Upcoming,
        }
    }
}

const DEFAULT_LOCATION: &str = "Salão Beleza Natural";

pub struct BookingRelay<S> {
    store: S,
}

impl<S: KeyValueStore> BookingRelay<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store the selection, replacing any unconsumed one.
    pub fn publish(&self, selection: &BookingSelection) -> Result<(), StorageError> {
        storage::write_json(&self.store, keys::BOOKING_SELECTION, selection)?;
        tracing::debug!("Booking selection published: {}", selection.name());
        Ok(())
    }

    /// Take the pending selection, if any. The slot is empty afterwards.
    pub fn consume_if_present(&self) -> Option<BookingSelection> {
        self.store.get(keys::BOOKING_SELECTION)?;
        let selection: Option<BookingSelection> =
            storage::read_json(&self.store, keys::BOOKING_SELECTION);
        if let Err(e) = self.store.remove(keys::BOOKING_SELECTION) {
            tracing::warn!("Failed to clear booking selection: {}", e);
        }
        if let Some(selection) = &selection {
            tracing::debug!("Booking selection consumed: {}", selection.name());
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::storage::{FailingStore, MemoryStore};

    #[test]
    fn consume_returns_published_selection_once() {
        let relay = BookingRelay::new(MemoryStore::new());
        let selection = BookingSelection::Service(catalog::services().remove(0));
        relay.publish(&selection).unwrap();

        assert_eq!(relay.consume_if_present(), Some(selection));
        assert_eq!(relay.consume_if_present(), None);
    }

    #[test]
    fn publish_overwrites_unconsumed_selection() {
        let relay = BookingRelay::new(MemoryStore::new());
        relay
            .publish(&BookingSelection::Service(catalog::services().remove(0)))
            .unwrap();
        let salon = BookingSelection::Salon(catalog::salons().remove(1));
        relay.publish(&salon).unwrap();

        assert_eq!(relay.consume_if_present(), Some(salon));
        assert_eq!(relay.consume_if_present(), None);
    }

    #[test]
    fn malformed_slot_reads_as_none_and_is_cleared() {
        let store = MemoryStore::seeded([(keys::BOOKING_SELECTION, "{\"kind\":\"spaceship\"}")]);
        let relay = BookingRelay::new(store.clone());

        assert_eq!(relay.consume_if_present(), None);
        assert!(!store.contains(keys::BOOKING_SELECTION));
    }

    #[test]
    fn booking_a_salon_uses_its_first_service() {
        let salon = catalog::salons().remove(0);
        let date = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let time = NaiveTime::from_hms_opt(15, 30, 0).unwrap();

        let booked = BookingSelection::Salon(salon.clone()).book("x1".into(), date, time);

        assert_eq!(booked.location, salon.name);
        assert_eq!(Some(&booked.service), salon.services.first());
        assert_eq!(booked.status, AppointmentStatus::Upcoming);
        assert_eq!(booked.time_label(), "15:30");
    }

    #[test]
    fn empty_slot_reads_as_none() {
        let relay = BookingRelay::new(MemoryStore::new());
        assert_eq!(relay.consume_if_present(), None);
    }

    #[test]
    fn publish_reports_unwritable_storage() {
        let relay = BookingRelay::new(FailingStore);
        let selection = BookingSelection::Service(catalog::services().remove(0));

        assert!(matches!(
            relay.publish(&selection),
            Err(StorageError::Unavailable)
        ));
        assert_eq!(relay.consume_if_present(), None);
    }
}
