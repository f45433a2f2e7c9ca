//! Cancellation of in-flight requests on component teardown.
//!
//! A page keeps one [`AbortGuard`] for its lifetime and hands the
//! guard's signal to every fetch it spawns; dropping the guard on
//! unmount aborts them. Responses that land after navigation are then
//! dropped by the browser instead of being applied to state the user
//! has already left behind.
//!
//! Outside the browser build both types are inert placeholders so the
//! calling code compiles unchanged.

#[cfg(feature = "csr")]
pub type AbortSignal = web_sys::AbortSignal;

#[cfg(not(feature = "csr"))]
#[derive(Clone, Debug)]
pub struct AbortSignal;

#[cfg(feature = "csr")]
pub struct AbortGuard {
    controller: Option<web_sys::AbortController>,
}

#[cfg(feature = "csr")]
impl AbortGuard {
    pub fn new() -> Self {
        Self {
            controller: web_sys::AbortController::new().ok(),
        }
    }

    /// Signal to bind a request to. `None` outside a browser realm.
    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(web_sys::AbortController::signal)
    }

    /// Abort everything bound to this guard's signal. Idempotent.
    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

#[cfg(feature = "csr")]
impl Default for AbortGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "csr")]
impl Drop for AbortGuard {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(not(feature = "csr"))]
#[derive(Default)]
pub struct AbortGuard;

#[cfg(not(feature = "csr"))]
impl AbortGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        None
    }

    pub fn abort(&self) {}
}
