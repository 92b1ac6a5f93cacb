//! Query-parameter access against the current address.
//!
//! The view core never parses URLs itself; it reads and writes single named
//! parameters through this port. Real adapters wrap the host's location and
//! history APIs; the in-memory implementation backs tests and dev harnesses.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vitrine_core::{ViewError, ViewResult};

/// Read/write access to one named query parameter of the current address.
pub trait QueryParams: Send + Sync {
    /// Read a single named parameter. Absent parameters return `None`.
    fn read(&self, name: &str) -> Option<String>;

    /// Write a single named parameter in replace mode.
    ///
    /// Implementations must be idempotent and must not create a history
    /// entry or trigger a navigation of their own.
    fn write_replace(&self, name: &str, value: &str) -> ViewResult<()>;
}

impl<Q> QueryParams for Arc<Q>
where
    Q: QueryParams + ?Sized,
{
    fn read(&self, name: &str) -> Option<String> {
        (**self).read(name)
    }

    fn write_replace(&self, name: &str, value: &str) -> ViewResult<()> {
        (**self).write_replace(name, value)
    }
}

/// In-memory query-parameter store for tests/dev.
///
/// Keeps a log of every replace-mode write so harnesses can assert on what
/// reached the address bar.
#[derive(Debug, Default)]
pub struct InMemoryQueryParams {
    params: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl InMemoryQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a single parameter, as if the page had been opened with it.
    pub fn with_param(name: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(name, value);
        store
    }

    /// Host-side mutation (e.g. a navigation applying a new query string).
    /// Does not count as a replace-mode write.
    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut params) = self.params.lock() {
            params.insert(name.into(), value.into());
        }
    }

    /// Every replace-mode write issued through the port, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

impl QueryParams for InMemoryQueryParams {
    fn read(&self, name: &str) -> Option<String> {
        self.params.lock().ok()?.get(name).cloned()
    }

    fn write_replace(&self, name: &str, value: &str) -> ViewResult<()> {
        let mut params = self
            .params
            .lock()
            .map_err(|_| ViewError::port_unavailable("query parameter store poisoned"))?;
        params.insert(name.to_string(), value.to_string());
        drop(params);

        if let Ok(mut writes) = self.writes.lock() {
            writes.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }
}
