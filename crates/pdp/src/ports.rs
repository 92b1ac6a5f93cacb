//! Collaborator contracts the page depends on.
//!
//! The view core never talks to transport, chrome components or navigation
//! machinery directly; it is wired with these ports and stays testable
//! against the recording implementations in [`crate::in_memory`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_catalog::ProductRecord;
use vitrine_core::RequestId;

/// Filter identifying the product a fetch should load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub product_url_path: String,
    pub single_product: bool,
}

/// A fire-and-forget product fetch request.
///
/// Carries a correlation id and an issuance timestamp; the core never awaits
/// completion, it observes the shared loaded-product store on later passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub request_id: RequestId,
    pub filter: ProductFilter,
    pub issued_at: DateTime<Utc>,
}

impl ProductRequest {
    /// Request the single product addressed by `path`.
    pub fn single(path: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            filter: ProductFilter {
                product_url_path: path.into(),
                single_product: true,
            },
            issued_at: Utc::now(),
        }
    }
}

/// Issues product fetches against the backing data service.
pub trait ProductFetcher: Send + Sync {
    fn request(&self, request: ProductRequest);
}

/// Clears transient per-option quantity selections for grouped products.
/// That state has no meaning outside the detail page.
pub trait GroupedSelections: Send + Sync {
    fn clear_quantities(&self);
}

/// Breadcrumb trail collaborator.
pub trait BreadcrumbSink: Send + Sync {
    fn update_with_product(&self, product: &ProductRecord);
}

/// Page identity vocabulary shared with the header chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTag {
    Home,
    Category,
    Pdp,
    Cart,
}

/// Header configuration pushed by a page taking over the chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderState {
    pub page: PageTag,
    pub title: String,
}

/// Back-navigation capability handed to the header alongside its state.
pub type OnBack = Arc<dyn Fn() + Send + Sync>;

/// Header chrome collaborator.
pub trait HeaderSink: Send + Sync {
    fn change_state(&self, state: HeaderState, on_back: OnBack);
}

/// Navigation capability (injected, never a module-level global).
pub trait Navigator: Send + Sync {
    fn go_back(&self);
}
