//! Addressable location of the client.

use serde::{Deserialize, Serialize};

use vitrine_catalog::ProductRecord;

/// Product data and/or variant index attached to a single navigation event.
///
/// A link click on a listing page already holds most of the record it points
/// at, so the router carries it along and the target page can paint without
/// waiting on a network round-trip. Immutable for the duration of that
/// navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSnapshot {
    pub product: Option<ProductRecord>,
    pub variant_index: Option<usize>,
}

impl NavigationSnapshot {
    /// The record carried by this navigation, if any.
    pub fn product(&self) -> Option<&ProductRecord> {
        self.product.as_ref()
    }
}

/// Current address of the client: the URL path segment identifying the
/// product, plus whatever state the navigation system attached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub path: String,
    #[serde(default)]
    pub state: NavigationSnapshot,
}

impl Address {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: NavigationSnapshot::default(),
        }
    }

    pub fn with_state(path: impl Into<String>, state: NavigationSnapshot) -> Self {
        Self {
            path: path.into(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::ProductId;

    #[test]
    fn bare_address_carries_no_snapshot() {
        let address = Address::new("breathe-easy-tank");
        assert_eq!(address.path, "breathe-easy-tank");
        assert!(address.state.product().is_none());
        assert!(address.state.variant_index.is_none());
    }

    #[test]
    fn snapshot_round_trips_through_router_serialization() {
        let address = Address::with_state(
            "breathe-easy-tank",
            NavigationSnapshot {
                product: Some(ProductRecord {
                    id: Some(ProductId::new(1045)),
                    name: Some("Breathe-Easy Tank".to_string()),
                    ..ProductRecord::empty()
                }),
                variant_index: Some(2),
            },
        );

        let json = serde_json::to_string(&address).unwrap();
        let restored: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, address);
    }
}
