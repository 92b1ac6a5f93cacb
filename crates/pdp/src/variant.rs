//! Configurable-variant selection state.

use serde::{Deserialize, Serialize};

/// Query parameter mirroring the selected configurable variant.
pub const VARIANT_PARAM: &str = "variant";

/// Selection state for the configurable-variant picker.
///
/// Two-phase ownership: the URL seeds the index exactly once per navigation
/// lifecycle (`initialized` guards the seeding), after which the index
/// belongs to explicit user selection. A shared or bookmarked URL is honored
/// on the first pass without fighting the user's later choices on every
/// re-render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    /// Index into the resolved record's variant list. Always non-negative;
    /// out-of-range values fall back to the parent record at lookup time.
    pub index: usize,
    /// Whether the index has been seeded for the current navigation
    /// lifecycle.
    pub initialized: bool,
}

impl VariantSelection {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Derive-on-render transition.
///
/// Parses the raw `variant` query value; malformed or absent input maps
/// to 0. Seeds the selection when it has not been initialized for the
/// current navigation lifecycle, and is a no-op afterwards.
pub fn derive_from_query(prior: VariantSelection, raw: Option<&str>) -> VariantSelection {
    if prior.initialized {
        return prior;
    }

    let index = raw
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    VariantSelection {
        index,
        initialized: true,
    }
}
