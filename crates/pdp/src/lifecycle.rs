//! Page lifecycle orchestration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use vitrine_catalog::ProductRecord;
use vitrine_nav::{Address, QueryParams};

use crate::dependents::ChromeNotifier;
use crate::ports::{
    BreadcrumbSink, GroupedSelections, HeaderSink, Navigator, OnBack, ProductFetcher,
    ProductRequest,
};
use crate::source::resolve_data_source;
use crate::variant::{derive_from_query, VariantSelection, VARIANT_PARAM};

/// Named lifecycle transition, consumed by [`ProductPage::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    /// The page entered the tree.
    Mounted,
    /// The address path changed since the previous pass.
    AddressChanged,
    /// The navigation snapshot's variant indicator changed value.
    NavVariantChanged,
    /// The page left the tree.
    Unmounted,
}

/// Inputs a single render pass observes.
#[derive(Debug, Clone, Copy)]
pub struct PageInput<'a> {
    /// Current address (path + navigation state).
    pub address: &'a Address,
    /// Contents of the shared loaded-product store.
    pub product: &'a ProductRecord,
    /// True while the page renders placeholder chrome only; no fetch is
    /// worth issuing yet.
    pub placeholder_only: bool,
}

impl<'a> PageInput<'a> {
    pub fn new(address: &'a Address, product: &'a ProductRecord) -> Self {
        Self {
            address,
            product,
            placeholder_only: false,
        }
    }

    pub fn placeholder(address: &'a Address, product: &'a ProductRecord) -> Self {
        Self {
            address,
            product,
            placeholder_only: true,
        }
    }
}

/// What a pass observed, retained for diffing the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSnapshot {
    pub path: String,
    pub nav_variant: Option<usize>,
}

impl PassSnapshot {
    pub fn of(input: &PageInput<'_>) -> Self {
        Self {
            path: input.address.path.clone(),
            nav_variant: input.address.state.variant_index,
        }
    }
}

/// Diff the previous pass against the current input.
///
/// Path inequality raises [`PageEvent::AddressChanged`]; a variant indicator
/// whose value changed (absence counts as a value) raises
/// [`PageEvent::NavVariantChanged`]. With no previous pass there is nothing
/// to compare and no event fires.
pub fn transitions(prior: Option<&PassSnapshot>, input: &PageInput<'_>) -> Vec<PageEvent> {
    let Some(prior) = prior else {
        return Vec::new();
    };

    let mut events = Vec::new();
    if prior.path != input.address.path {
        events.push(PageEvent::AddressChanged);
    }
    if prior.nav_variant != input.address.state.variant_index {
        events.push(PageEvent::NavVariantChanged);
    }
    events
}

/// Collaborator ports the page is wired with.
pub struct PagePorts {
    pub fetcher: Arc<dyn ProductFetcher>,
    pub breadcrumbs: Arc<dyn BreadcrumbSink>,
    pub header: Arc<dyn HeaderSink>,
    pub grouped: Arc<dyn GroupedSelections>,
    pub query: Arc<dyn QueryParams>,
    pub navigator: Arc<dyn Navigator>,
}

/// The product detail page's view-state controller.
///
/// Owns the variant selection, decides which record is authoritative for
/// each render, mirrors the selection into the URL and drives breadcrumb and
/// header updates. Rendering itself is a collaborator's job.
///
/// Host drivers call [`mount`](Self::mount) once, [`update`](Self::update)
/// on every later render pass and [`unmount`](Self::unmount) when the page
/// leaves the tree. All transitions run synchronously inside the calling
/// pass; the only asynchronous boundary is the fire-and-forget fetch, whose
/// completion shows up as new store contents on a later pass.
pub struct ProductPage {
    fetcher: Arc<dyn ProductFetcher>,
    grouped: Arc<dyn GroupedSelections>,
    query: Arc<dyn QueryParams>,
    navigator: Arc<dyn Navigator>,
    chrome: ChromeNotifier,
    selection: VariantSelection,
    prior: Option<PassSnapshot>,
}

impl ProductPage {
    pub fn new(ports: PagePorts) -> Self {
        let chrome = ChromeNotifier::new(ports.breadcrumbs, ports.header);
        Self {
            fetcher: ports.fetcher,
            grouped: ports.grouped,
            query: ports.query,
            navigator: ports.navigator,
            chrome,
            selection: VariantSelection::new(),
            prior: None,
        }
    }

    /// Current selection state, exposed to the presentation layer.
    pub fn selection(&self) -> VariantSelection {
        self.selection
    }

    /// The record authoritative for the current render. Derived on every
    /// access, never stored.
    pub fn data_source<'a>(&self, input: &PageInput<'a>) -> &'a ProductRecord {
        resolve_data_source(input.product, input.address.state.product())
    }

    /// Behavioral API handed to the variant picker: the variant at `index`,
    /// or the source itself when out of range.
    pub fn variant_or_self<'a>(
        &self,
        index: usize,
        source: &'a ProductRecord,
    ) -> &'a ProductRecord {
        source.variant_or_self(index)
    }

    /// The page entered the tree.
    pub fn mount(&mut self, input: &PageInput<'_>) {
        self.derive_selection();
        self.dispatch(PageEvent::Mounted, input);
        self.notify_dependents(input);
        self.prior = Some(PassSnapshot::of(input));
    }

    /// The page re-rendered: address, navigation state or store contents may
    /// have moved. Diffs against the previous pass, applies the resulting
    /// transition events, then re-runs the dependent-update pass.
    pub fn update(&mut self, input: &PageInput<'_>) {
        self.derive_selection();
        for event in transitions(self.prior.as_ref(), input) {
            self.dispatch(event, input);
        }
        self.notify_dependents(input);
        self.prior = Some(PassSnapshot::of(input));
    }

    /// The page left the tree.
    pub fn unmount(&mut self, input: &PageInput<'_>) {
        self.dispatch(PageEvent::Unmounted, input);
    }

    /// Apply a single lifecycle transition.
    pub fn dispatch(&mut self, event: PageEvent, input: &PageInput<'_>) {
        match event {
            PageEvent::Mounted => {
                if !input.placeholder_only {
                    self.issue_fetch(&input.address.path);
                }
            }
            PageEvent::AddressChanged => self.issue_fetch(&input.address.path),
            PageEvent::NavVariantChanged => self.selection.initialized = false,
            PageEvent::Unmounted => {
                if self.data_source(input).is_grouped() {
                    self.grouped.clear_quantities();
                }
            }
        }
    }

    /// Explicit variant selection from the picker.
    ///
    /// Mirrors the new index into the URL in replace mode, skipping the
    /// write when the index is unchanged, and always updates the in-memory
    /// selection. Idempotent with respect to observable output.
    pub fn update_url(&mut self, index: usize) {
        if index != self.selection.index {
            if let Err(err) = self.query.write_replace(VARIANT_PARAM, &index.to_string()) {
                tracing::warn!("failed to mirror variant selection into the URL: {err:?}");
            }
        }
        self.selection.index = index;
    }

    fn derive_selection(&mut self) {
        let raw = self.query.read(VARIANT_PARAM);
        self.selection = derive_from_query(self.selection, raw.as_deref());
    }

    fn issue_fetch(&mut self, path: &str) {
        // A different product is coming; the next pass re-seeds the
        // selection from the URL.
        self.selection.initialized = false;

        let request = ProductRequest::single(path);
        tracing::debug!(request_id = %request.request_id, path, "requesting product");
        self.fetcher.request(request);
    }

    fn notify_dependents(&self, input: &PageInput<'_>) {
        let navigator = Arc::clone(&self.navigator);
        let on_back: OnBack = Arc::new(move || navigator.go_back());
        self.chrome.notify(self.data_source(input), on_back);
    }
}
