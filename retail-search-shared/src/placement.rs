//! Placement resource names.
//!
//! A placement identifies the serving configuration that handles a search
//! request. Only the default search placement of the default catalog is used.

/// Build the default search placement for a project.
///
/// The project number is interpolated as-is. An empty project number yields
/// `projects//...`, which the service rejects; nothing is validated locally.
pub fn default_search_placement(project_number: &str) -> String {
    format!(
        "projects/{}/locations/global/catalogs/default_catalog/placements/default_search",
        project_number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_placement() {
        assert_eq!(
            default_search_placement("1234567890"),
            "projects/1234567890/locations/global/catalogs/default_catalog/placements/default_search"
        );
    }

    #[test]
    fn test_only_project_segment_changes() {
        let a = default_search_placement("111");
        let b = default_search_placement("222");

        assert_eq!(a.replace("111", "222"), b);
    }

    #[test]
    fn test_empty_project_number_passes_through() {
        assert!(default_search_placement("").starts_with("projects//locations/global/"));
    }
}
