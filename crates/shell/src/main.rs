//! Dev shell: drives the product detail page through a scripted browsing
//! session against the in-memory collaborators, so the view-state core's log
//! output can be watched without a host UI runtime. Filtering stays under
//! `RUST_LOG` (try `RUST_LOG=vitrine_pdp=debug`).

use std::sync::Arc;

use vitrine_catalog::{ProductKind, ProductRecord, VariantEntry};
use vitrine_core::ProductId;
use vitrine_nav::{Address, InMemoryQueryParams, NavigationSnapshot, QueryParams};
use vitrine_pdp::in_memory::{
    RecordingBreadcrumbs, RecordingFetcher, RecordingGroupedSelections, RecordingHeader,
    RecordingNavigator,
};
use vitrine_pdp::{PageInput, PagePorts, ProductPage, VARIANT_PARAM};

fn main() {
    vitrine_observability::init();

    let fetcher = Arc::new(RecordingFetcher::new());
    let breadcrumbs = Arc::new(RecordingBreadcrumbs::new());
    let header = Arc::new(RecordingHeader::new());
    let grouped = Arc::new(RecordingGroupedSelections::new());
    let query = Arc::new(InMemoryQueryParams::with_param(VARIANT_PARAM, "1"));
    let navigator = Arc::new(RecordingNavigator::new());

    let mut page = ProductPage::new(PagePorts {
        fetcher: fetcher.clone(),
        breadcrumbs: breadcrumbs.clone(),
        header: header.clone(),
        grouped: grouped.clone(),
        query: query.clone(),
        navigator: navigator.clone(),
    });

    // A shared link opens with ?variant=1 and nothing loaded yet.
    let address = Address::new("breathe-easy-tank");
    let empty = ProductRecord::empty();
    page.mount(&PageInput::new(&address, &empty));
    tracing::info!(
        in_flight = fetcher.requests().len(),
        "mounted with an empty store"
    );

    // The fetch lands and the store fills in.
    let loaded = tank();
    let input = PageInput::new(&address, &loaded);
    page.update(&input);

    let selection = page.selection();
    let shown = page.variant_or_self(selection.index, page.data_source(&input));
    let title = header
        .changes()
        .last()
        .map(|state| state.title.clone())
        .unwrap_or_default();
    tracing::info!(
        title = %title,
        variant = selection.index,
        sku = shown.sku.as_deref().unwrap_or("-"),
        "product painted"
    );

    // The user picks a different option combination.
    page.update_url(0);
    tracing::info!(query = ?query.read(VARIANT_PARAM), "variant reselected");

    // Click through to a grouped product the listing page already had on
    // hand; the stale tank record in the store loses to the navigated one.
    let kit_address = Address::with_state(
        "yoga-kit",
        NavigationSnapshot {
            product: Some(kit()),
            variant_index: None,
        },
    );
    let input = PageInput::new(&kit_address, &loaded);
    page.update(&input);
    tracing::info!(
        source = page.data_source(&input).name.as_deref().unwrap_or("-"),
        in_flight = fetcher.requests().len(),
        "navigated to a grouped product"
    );

    // Back out of the page.
    header.press_back();
    page.unmount(&input);
    tracing::info!(
        back_navigations = navigator.backs(),
        breadcrumb_updates = breadcrumbs.updates().len(),
        grouped_clears = grouped.clears(),
        "session finished"
    );
}

fn tank() -> ProductRecord {
    ProductRecord {
        id: Some(ProductId::new(1045)),
        sku: Some("WT09".to_string()),
        name: Some("Breathe-Easy Tank".to_string()),
        kind: Some(ProductKind::Configurable),
        url_path: Some("breathe-easy-tank".to_string()),
        variants: vec![
            variant(1041, "WT09-XS-Purple"),
            variant(1042, "WT09-XS-White"),
        ],
    }
}

fn kit() -> ProductRecord {
    ProductRecord {
        id: Some(ProductId::new(3000)),
        name: Some("Yoga Kit".to_string()),
        kind: Some(ProductKind::Grouped),
        url_path: Some("yoga-kit".to_string()),
        ..ProductRecord::empty()
    }
}

fn variant(id: u64, sku: &str) -> VariantEntry {
    VariantEntry {
        product: ProductRecord {
            id: Some(ProductId::new(id)),
            sku: Some(sku.to_string()),
            ..ProductRecord::empty()
        },
    }
}
