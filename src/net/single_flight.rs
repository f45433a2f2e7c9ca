#[cfg(test)]
#[path = "single_flight_test.rs"]
mod single_flight_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, Shared};

use crate::net::error::ApiError;

type Flight = Shared<LocalBoxFuture<'static, Result<(), ApiError>>>;

/// Coalesces concurrent calls into one shared in-flight operation.
///
/// The first caller starts the future; callers arriving while it is
/// pending await a clone of the same future instead of starting their
/// own. Used for token refresh, where a burst of 401s from parallel
/// requests must produce exactly one refresh call.
#[derive(Clone, Default)]
pub struct SingleFlight {
    slot: Rc<RefCell<Option<Flight>>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `start` unless a flight is already pending, in which case
    /// await that flight's result instead.
    pub async fn run<F, Fut>(&self, start: F) -> Result<(), ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let flight = {
            let mut slot = self.slot.borrow_mut();
            match slot.as_ref() {
                Some(flight) => flight.clone(),
                None => {
                    let flight = start().boxed_local().shared();
                    *slot = Some(flight.clone());
                    flight
                }
            }
        };

        let result = flight.clone().await;

        // Clear the slot, unless a later caller already replaced the
        // landed flight with a new one.
        let mut slot = self.slot.borrow_mut();
        if slot
            .as_ref()
            .is_some_and(|current| Shared::ptr_eq(current, &flight))
        {
            *slot = None;
        }

        result
    }

    /// Whether a flight is currently pending.
    pub fn in_flight(&self) -> bool {
        self.slot.borrow().is_some()
    }
}
