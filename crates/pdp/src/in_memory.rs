//! Recording collaborator implementations for tests/dev.
//!
//! Each double records what reached it; harnesses assert on the logs. No IO,
//! no async.

use std::sync::Mutex;

use vitrine_catalog::ProductRecord;

use crate::ports::{
    BreadcrumbSink, GroupedSelections, HeaderSink, HeaderState, Navigator, OnBack, ProductFetcher,
    ProductRequest,
};

/// Fetcher double; keeps every issued request in order.
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    requests: Mutex<Vec<ProductRequest>>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ProductRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ProductFetcher for RecordingFetcher {
    fn request(&self, request: ProductRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

/// Breadcrumb double; keeps every record pushed at it.
#[derive(Debug, Default)]
pub struct RecordingBreadcrumbs {
    updates: Mutex<Vec<ProductRecord>>,
}

impl RecordingBreadcrumbs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<ProductRecord> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }
}

impl BreadcrumbSink for RecordingBreadcrumbs {
    fn update_with_product(&self, product: &ProductRecord) {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push(product.clone());
        }
    }
}

/// Header double; keeps every pushed state and the most recent back callback
/// so harnesses can trigger it.
#[derive(Default)]
pub struct RecordingHeader {
    changes: Mutex<Vec<HeaderState>>,
    last_on_back: Mutex<Option<OnBack>>,
}

impl RecordingHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<HeaderState> {
        self.changes
            .lock()
            .map(|changes| changes.clone())
            .unwrap_or_default()
    }

    /// Trigger the most recently received back callback, as the header's
    /// back button would.
    pub fn press_back(&self) {
        let on_back = self
            .last_on_back
            .lock()
            .ok()
            .and_then(|slot| slot.clone());
        if let Some(on_back) = on_back {
            on_back();
        }
    }
}

impl HeaderSink for RecordingHeader {
    fn change_state(&self, state: HeaderState, on_back: OnBack) {
        if let Ok(mut changes) = self.changes.lock() {
            changes.push(state);
        }
        if let Ok(mut slot) = self.last_on_back.lock() {
            *slot = Some(on_back);
        }
    }
}

/// Grouped-selection double; counts clear calls.
#[derive(Debug, Default)]
pub struct RecordingGroupedSelections {
    clears: Mutex<usize>,
}

impl RecordingGroupedSelections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clears(&self) -> usize {
        self.clears.lock().map(|clears| *clears).unwrap_or(0)
    }
}

impl GroupedSelections for RecordingGroupedSelections {
    fn clear_quantities(&self) {
        if let Ok(mut clears) = self.clears.lock() {
            *clears += 1;
        }
    }
}

/// Navigator double; counts back navigations.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    backs: Mutex<usize>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backs(&self) -> usize {
        self.backs.lock().map(|backs| *backs).unwrap_or(0)
    }
}

impl Navigator for RecordingNavigator {
    fn go_back(&self) {
        if let Ok(mut backs) = self.backs.lock() {
            *backs += 1;
        }
    }
}
