//! All-or-nothing batch authorization over a resolved set.

use crate::server::model::access::{AffiliationSet, EntityRef};

/// True only when every requested entity is present in the resolved set for
/// its kind. Partial coverage is a denial, and an empty request authorizes
/// nothing.
pub fn authorize_all(resolved: &AffiliationSet, requested: &[EntityRef]) -> bool {
    !requested.is_empty() && requested.iter().all(|entry| resolved.contains(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved() -> AffiliationSet {
        [
            EntityRef::character(1),
            EntityRef::character(2),
            EntityRef::corporation(10),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_full_coverage_is_authorized() {
        assert!(authorize_all(
            &resolved(),
            &[EntityRef::character(1), EntityRef::corporation(10)]
        ));
    }

    /// One uncovered entity denies the whole batch
    #[test]
    fn test_partial_coverage_is_denied() {
        assert!(!authorize_all(
            &resolved(),
            &[EntityRef::character(1), EntityRef::character(3)]
        ));
    }

    /// Membership is tested per id-space, not by bare ID
    #[test]
    fn test_kind_mismatch_is_denied() {
        assert!(!authorize_all(&resolved(), &[EntityRef::corporation(1)]));
    }

    #[test]
    fn test_empty_request_is_denied() {
        assert!(!authorize_all(&resolved(), &[]));
    }
}
