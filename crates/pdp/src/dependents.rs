//! Dependent chrome updates.

use std::sync::Arc;

use vitrine_catalog::ProductRecord;

use crate::ports::{BreadcrumbSink, HeaderSink, HeaderState, OnBack, PageTag};

/// Pushes breadcrumb and header updates for the record a render resolved.
///
/// Fires on every mount/update pass with a non-empty record and never with
/// an empty one. Repeat notifications with an unchanged record are allowed;
/// deduplication is a sink-side concern.
pub struct ChromeNotifier {
    breadcrumbs: Arc<dyn BreadcrumbSink>,
    header: Arc<dyn HeaderSink>,
}

impl ChromeNotifier {
    pub fn new(breadcrumbs: Arc<dyn BreadcrumbSink>, header: Arc<dyn HeaderSink>) -> Self {
        Self {
            breadcrumbs,
            header,
        }
    }

    pub fn notify(&self, source: &ProductRecord, on_back: OnBack) {
        if source.is_empty() {
            return;
        }

        self.breadcrumbs.update_with_product(source);
        self.header.change_state(
            HeaderState {
                page: PageTag::Pdp,
                title: source.name.clone().unwrap_or_default(),
            },
            on_back,
        );
    }
}
