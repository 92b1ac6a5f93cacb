//! Authoritative data-source resolution.

use vitrine_catalog::ProductRecord;

/// Pick the record the current render should trust.
///
/// The locally loaded record wins only when it is non-empty and either no
/// navigation-state record exists or both carry the same identifier. In every
/// other case the navigation-state record wins: the product the user
/// navigated *to* outranks a loaded record whose identifier no longer matches
/// the route, even though the snapshot may be the less complete of the two.
/// When both candidates are empty the (empty) loaded record is returned as
/// the "not yet available" sentinel.
pub fn resolve_data_source<'a>(
    loaded: &'a ProductRecord,
    navigated: Option<&'a ProductRecord>,
) -> &'a ProductRecord {
    // An empty snapshot counts as no snapshot at all.
    let navigated = navigated.filter(|record| !record.is_empty());

    match navigated {
        None => loaded,
        Some(snapshot) => {
            if !loaded.is_empty() && loaded.id == snapshot.id {
                loaded
            } else {
                snapshot
            }
        }
    }
}
