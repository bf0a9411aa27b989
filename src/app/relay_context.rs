//! Booking selection relay shared via context.

use dioxus::prelude::*;

use crate::relay::{BookingRelay, BookingSelection};
use crate::storage::{browser_store, BrowserStore, StorageArea, StorageError};

#[derive(Clone, Copy)]
pub struct RelayContext {
    relay: Signal<BookingRelay<BrowserStore>>,
}

impl RelayContext {
    pub fn publish(&self, selection: &BookingSelection) -> Result<(), StorageError> {
        self.relay.peek().publish(selection)
    }

    pub fn consume_if_present(&self) -> Option<BookingSelection> {
        self.relay.peek().consume_if_present()
    }
}

pub fn use_relay_provider() {
    let relay = use_signal(|| BookingRelay::new(browser_store(StorageArea::Local)));
    use_context_provider(|| RelayContext { relay });
}

pub fn use_relay() -> RelayContext {
    use_context::<RelayContext>()
}
