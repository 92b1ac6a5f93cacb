use serde::{Deserialize, Serialize};

use vitrine_core::ProductId;

/// Catalog type classifier.
///
/// Mirrors the backing catalog service's type vocabulary. `Grouped` products
/// are composed of sub-items with independent quantity selections and need
/// cleanup when the detail page is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Simple,
    Configurable,
    Grouped,
    Bundle,
    Virtual,
    Downloadable,
}

/// One configurable option combination, wrapping the more specific record
/// it resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantEntry {
    pub product: ProductRecord,
}

/// Catalog entry read model (matches the catalog API response shape).
///
/// Records reach the client from two directions: the product fetch service
/// and navigation state attached to a link click. A navigated record may be
/// partial (enough to paint above-the-fold content), so every field is
/// optional and consumers treat the all-absent record as "not yet available".
/// Read-only to the view layer; replaced wholesale by the fetch collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub id: Option<ProductId>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub kind: Option<ProductKind>,
    pub url_path: Option<String>,
    pub variants: Vec<VariantEntry>,
}

impl ProductRecord {
    /// The "not yet available" sentinel.
    pub const fn empty() -> Self {
        Self {
            id: None,
            sku: None,
            name: None,
            kind: None,
            url_path: None,
            variants: Vec::new(),
        }
    }

    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.sku.is_none()
            && self.name.is_none()
            && self.kind.is_none()
            && self.url_path.is_none()
            && self.variants.is_empty()
    }

    pub fn is_grouped(&self) -> bool {
        self.kind == Some(ProductKind::Grouped)
    }

    /// The configurable variant at `index`, or the record itself when the
    /// index is out of range or the record has no variants. Never fails.
    pub fn variant_or_self(&self, index: usize) -> &ProductRecord {
        self.variants
            .get(index)
            .map(|entry| &entry.product)
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_id(id: u64) -> ProductRecord {
        ProductRecord {
            id: Some(ProductId::new(id)),
            ..ProductRecord::empty()
        }
    }

    fn record_with_variants(ids: &[u64]) -> ProductRecord {
        ProductRecord {
            id: Some(ProductId::new(99)),
            variants: ids
                .iter()
                .map(|id| VariantEntry {
                    product: record_with_id(*id),
                })
                .collect(),
            ..ProductRecord::empty()
        }
    }

    #[test]
    fn empty_record_reports_empty() {
        assert!(ProductRecord::empty().is_empty());
        assert!(ProductRecord::default().is_empty());
    }

    #[test]
    fn any_single_field_makes_record_non_empty() {
        assert!(!record_with_id(1).is_empty());

        let named = ProductRecord {
            name: Some("Shirt".to_string()),
            ..ProductRecord::empty()
        };
        assert!(!named.is_empty());
    }

    #[test]
    fn variant_or_self_returns_nested_product_in_range() {
        let record = record_with_variants(&[1, 2]);
        assert_eq!(record.variant_or_self(1).id, Some(ProductId::new(2)));
    }

    #[test]
    fn variant_or_self_falls_back_on_out_of_range_index() {
        let record = record_with_variants(&[1, 2]);
        assert_eq!(record.variant_or_self(5), &record);
    }

    #[test]
    fn variant_or_self_falls_back_when_no_variants_exist() {
        let record = record_with_id(7);
        assert_eq!(record.variant_or_self(0), &record);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&ProductKind::Grouped).unwrap();
        assert_eq!(json, r#""grouped""#);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: variant lookup is total. Any index yields either a
            /// nested variant product or the record itself.
            #[test]
            fn variant_or_self_is_total(index in any::<usize>(), count in 0usize..8) {
                let ids: Vec<u64> = (1..=count as u64).collect();
                let record = record_with_variants(&ids);

                let resolved = record.variant_or_self(index);
                if index < count {
                    prop_assert_eq!(resolved.id, Some(ProductId::new(index as u64 + 1)));
                } else {
                    prop_assert_eq!(resolved, &record);
                }
            }
        }
    }

    #[test]
    fn partial_api_payload_deserializes_with_defaults() {
        // A navigated record carries only what the listing page had on hand.
        let json = r#"{
            "id": 1045,
            "name": "Breathe-Easy Tank",
            "kind": "configurable",
            "url_path": "breathe-easy-tank",
            "variants": [
                { "product": { "id": 1041, "sku": "WT09-XS-Purple" } },
                { "product": { "id": 1042, "sku": "WT09-XS-White" } }
            ]
        }"#;

        let record: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(ProductId::new(1045)));
        assert_eq!(record.kind, Some(ProductKind::Configurable));
        assert!(record.sku.is_none());
        assert_eq!(record.variants.len(), 2);
        assert_eq!(
            record.variant_or_self(1).sku.as_deref(),
            Some("WT09-XS-White")
        );
    }
}
