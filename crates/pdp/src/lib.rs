//! Product detail page view-state core.
//!
//! Decides which product record is authoritative for each render, owns the
//! configurable-variant selection and its URL mirroring, and drives the
//! breadcrumb and header chrome when the authoritative record changes.
//! Rendering, transport and URL parsing live behind the ports in [`ports`]
//! and [`vitrine_nav::query`].

pub mod dependents;
pub mod in_memory;
pub mod lifecycle;
pub mod ports;
pub mod source;
pub mod variant;

pub use dependents::ChromeNotifier;
pub use lifecycle::{
    transitions, PageEvent, PageInput, PagePorts, PassSnapshot, ProductPage,
};
pub use ports::{
    BreadcrumbSink, GroupedSelections, HeaderSink, HeaderState, Navigator, OnBack, PageTag,
    ProductFetcher, ProductFilter, ProductRequest,
};
pub use source::resolve_data_source;
pub use variant::{derive_from_query, VariantSelection, VARIANT_PARAM};
