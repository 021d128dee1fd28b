//! Catalog Service - dependency catalog queries.
//!
//! Separated from GenerationService for single responsibility.

use crate::{
    application::ports::{CatalogEntry, DependencyCatalog},
    domain::Coordinate,
};

/// Service for dependency catalog operations.
pub struct CatalogService {
    catalog: Box<dyn DependencyCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Box<dyn DependencyCatalog>) -> Self {
        Self { catalog }
    }

    /// Resolve one dependency id.
    pub fn lookup(&self, id: &str) -> Option<Coordinate> {
        self.catalog.lookup(id)
    }

    /// List all entries, sorted by id.
    pub fn list(&self) -> Vec<CatalogEntry> {
        let mut entries = self.catalog.entries();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }

    /// Entries whose id or description contains `needle`, case-insensitively.
    pub fn search(&self, needle: &str) -> Vec<CatalogEntry> {
        let needle = needle.to_lowercase();
        self.list()
            .into_iter()
            .filter(|e| {
                e.id.to_lowercase().contains(&needle)
                    || e.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockDependencyCatalog;

    fn entry(id: &str, artifact: &str, description: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.into(),
            coordinate: Coordinate::new("org.example", artifact),
            description: description.into(),
        }
    }

    fn service() -> CatalogService {
        let mut catalog = MockDependencyCatalog::new();
        catalog.expect_entries().returning(|| {
            vec![
                entry("web", "starter-web", "Servlet web stack"),
                entry("actuator", "starter-actuator", "Health and metrics endpoints"),
            ]
        });
        CatalogService::new(Box::new(catalog))
    }

    #[test]
    fn list_is_sorted_by_id() {
        let ids: Vec<_> = service().list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["actuator", "web"]);
    }

    #[test]
    fn search_matches_description() {
        let hits = service().search("HEALTH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "actuator");
    }
}
