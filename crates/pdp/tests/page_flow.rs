//! Black-box tests driving the page through full navigation flows using only
//! the public surface and the recording collaborators.

use std::sync::Arc;

use vitrine_catalog::{ProductKind, ProductRecord, VariantEntry};
use vitrine_core::ProductId;
use vitrine_nav::{Address, InMemoryQueryParams, NavigationSnapshot, QueryParams};
use vitrine_pdp::in_memory::{
    RecordingBreadcrumbs, RecordingFetcher, RecordingGroupedSelections, RecordingHeader,
    RecordingNavigator,
};
use vitrine_pdp::{PageInput, PagePorts, ProductPage, VARIANT_PARAM};

struct Storefront {
    page: ProductPage,
    fetcher: Arc<RecordingFetcher>,
    breadcrumbs: Arc<RecordingBreadcrumbs>,
    header: Arc<RecordingHeader>,
    grouped: Arc<RecordingGroupedSelections>,
    query: Arc<InMemoryQueryParams>,
    navigator: Arc<RecordingNavigator>,
}

fn storefront(query: InMemoryQueryParams) -> Storefront {
    let fetcher = Arc::new(RecordingFetcher::new());
    let breadcrumbs = Arc::new(RecordingBreadcrumbs::new());
    let header = Arc::new(RecordingHeader::new());
    let grouped = Arc::new(RecordingGroupedSelections::new());
    let query = Arc::new(query);
    let navigator = Arc::new(RecordingNavigator::new());

    let page = ProductPage::new(PagePorts {
        fetcher: fetcher.clone(),
        breadcrumbs: breadcrumbs.clone(),
        header: header.clone(),
        grouped: grouped.clone(),
        query: query.clone(),
        navigator: navigator.clone(),
    });

    Storefront {
        page,
        fetcher,
        breadcrumbs,
        header,
        grouped,
        query,
        navigator,
    }
}

fn configurable(id: u64, name: &str, variant_ids: &[u64]) -> ProductRecord {
    ProductRecord {
        id: Some(ProductId::new(id)),
        name: Some(name.to_string()),
        kind: Some(ProductKind::Configurable),
        variants: variant_ids
            .iter()
            .map(|variant_id| VariantEntry {
                product: ProductRecord {
                    id: Some(ProductId::new(*variant_id)),
                    ..ProductRecord::empty()
                },
            })
            .collect(),
        ..ProductRecord::empty()
    }
}

#[test]
fn cold_load_from_a_bookmarked_variant_url() {
    // The user opens a shared link: no navigation state, ?variant=1 in the
    // query, nothing loaded yet.
    let mut shop = storefront(InMemoryQueryParams::with_param(VARIANT_PARAM, "1"));
    let address = Address::new("breathe-easy-tank");
    let empty = ProductRecord::empty();

    shop.page.mount(&PageInput::new(&address, &empty));

    // One fetch goes out; nothing is paintable yet.
    assert_eq!(shop.fetcher.requests().len(), 1);
    assert!(shop.header.changes().is_empty());
    assert_eq!(shop.page.selection().index, 1);

    // The fetch lands and the store updates.
    let loaded = configurable(1045, "Breathe-Easy Tank", &[1041, 1042]);
    let input = PageInput::new(&address, &loaded);
    shop.page.update(&input);

    assert_eq!(shop.fetcher.requests().len(), 1);
    assert_eq!(shop.header.changes().len(), 1);
    assert_eq!(shop.header.changes()[0].title, "Breathe-Easy Tank");
    assert_eq!(shop.breadcrumbs.updates().len(), 1);

    // The bookmarked variant resolves to the second option combination.
    let selection = shop.page.selection();
    assert!(selection.initialized);
    let shown = shop.page.variant_or_self(selection.index, shop.page.data_source(&input));
    assert_eq!(shown.id, Some(ProductId::new(1042)));
}

#[test]
fn listing_click_paints_from_the_snapshot_then_prefers_the_loaded_record() {
    let mut shop = storefront(InMemoryQueryParams::new());
    let snapshot_record = ProductRecord {
        id: Some(ProductId::new(1045)),
        name: Some("Breathe-Easy Tank".to_string()),
        ..ProductRecord::empty()
    };
    let address = Address::with_state(
        "breathe-easy-tank",
        NavigationSnapshot {
            product: Some(snapshot_record),
            variant_index: None,
        },
    );
    let empty = ProductRecord::empty();

    // Chrome paints immediately from the navigated record.
    shop.page.mount(&PageInput::new(&address, &empty));
    assert_eq!(shop.header.changes().len(), 1);

    // Once the full record loads with the same identifier, it wins.
    let loaded = configurable(1045, "Breathe-Easy Tank", &[1041]);
    let input = PageInput::new(&address, &loaded);
    shop.page.update(&input);
    let source = shop.page.data_source(&input);
    assert_eq!(source.variants.len(), 1);
}

#[test]
fn stale_loaded_record_loses_to_the_navigated_product() {
    let mut shop = storefront(InMemoryQueryParams::new());
    // The store still holds the previous page's product.
    let stale = configurable(1045, "Breathe-Easy Tank", &[1041]);
    let address = Address::with_state(
        "overnight-duffle",
        NavigationSnapshot {
            product: Some(ProductRecord {
                id: Some(ProductId::new(2100)),
                name: Some("Overnight Duffle".to_string()),
                ..ProductRecord::empty()
            }),
            variant_index: None,
        },
    );

    let input = PageInput::new(&address, &stale);
    shop.page.mount(&input);

    assert_eq!(
        shop.page.data_source(&input).id,
        Some(ProductId::new(2100))
    );
    assert_eq!(shop.header.changes()[0].title, "Overnight Duffle");
}

#[test]
fn in_page_reselection_travels_through_the_url_exactly_once() {
    let mut shop = storefront(InMemoryQueryParams::new());
    let address = Address::new("breathe-easy-tank");
    let loaded = configurable(1045, "Breathe-Easy Tank", &[1041, 1042, 1043]);
    shop.page.mount(&PageInput::new(&address, &loaded));
    shop.page.update(&PageInput::new(&address, &loaded));

    shop.page.update_url(2);
    shop.page.update_url(2);

    assert_eq!(
        shop.query.writes(),
        vec![(VARIANT_PARAM.to_string(), "2".to_string())]
    );
    assert_eq!(shop.query.read(VARIANT_PARAM).as_deref(), Some("2"));

    // Later renders leave the user's choice alone.
    shop.page.update(&PageInput::new(&address, &loaded));
    assert_eq!(shop.page.selection().index, 2);
}

#[test]
fn navigating_between_products_refetches_and_reseeds() {
    let mut shop = storefront(InMemoryQueryParams::new());
    let empty = ProductRecord::empty();

    let first = Address::new("breathe-easy-tank");
    shop.page.mount(&PageInput::new(&first, &empty));
    let first_loaded = configurable(1045, "Breathe-Easy Tank", &[1041, 1042]);
    shop.page.update(&PageInput::new(&first, &first_loaded));
    shop.page.update_url(1);

    // Click through to a different product; the router rewrites the query.
    shop.query.set(VARIANT_PARAM, "0");
    let second = Address::new("overnight-duffle");
    shop.page.update(&PageInput::new(&second, &first_loaded));

    assert_eq!(shop.fetcher.requests().len(), 2);
    assert_eq!(
        shop.fetcher.requests()[1].filter.product_url_path,
        "overnight-duffle"
    );
    assert!(!shop.page.selection().initialized);

    // The next pass re-seeds from the rewritten query.
    let second_loaded = configurable(2100, "Overnight Duffle", &[]);
    shop.page.update(&PageInput::new(&second, &second_loaded));
    assert_eq!(shop.page.selection().index, 0);
    assert!(shop.page.selection().initialized);
}

#[test]
fn leaving_a_grouped_product_clears_its_quantity_selections() {
    let mut shop = storefront(InMemoryQueryParams::new());
    let address = Address::new("yoga-kit");
    let loaded = ProductRecord {
        id: Some(ProductId::new(3000)),
        name: Some("Yoga Kit".to_string()),
        kind: Some(ProductKind::Grouped),
        ..ProductRecord::empty()
    };

    let input = PageInput::new(&address, &loaded);
    shop.page.mount(&input);
    shop.page.unmount(&input);

    assert_eq!(shop.grouped.clears(), 1);
}

#[test]
fn the_header_back_button_navigates_back() {
    let mut shop = storefront(InMemoryQueryParams::new());
    let address = Address::new("breathe-easy-tank");
    let loaded = configurable(1045, "Breathe-Easy Tank", &[]);

    shop.page.mount(&PageInput::new(&address, &loaded));
    shop.header.press_back();

    assert_eq!(shop.navigator.backs(), 1);
}
