//! Compiled-in dependency catalog.
//!
//! Ids follow the short names used by Spring Initializr. Entries without a
//! version are managed by the Spring Boot BOM imported in every `pom.xml`.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, instrument};

use kiln_core::{
    application::ports::{CatalogEntry, DependencyCatalog},
    domain::Coordinate,
    error::KilnResult,
};

use super::loader::CatalogLoader;

const BOOT: &str = "org.springframework.boot";

/// `(id, group, artifact, scope, description)`
#[rustfmt::skip]
const BUILTIN: &[(&str, &str, &str, Option<&str>, &str)] = &[
    ("actuator", BOOT, "spring-boot-starter-actuator", None, "Health, metrics and management endpoints"),
    ("amqp", BOOT, "spring-boot-starter-amqp", None, "RabbitMQ messaging"),
    ("cache", BOOT, "spring-boot-starter-cache", None, "Spring cache abstraction"),
    ("data-jpa", BOOT, "spring-boot-starter-data-jpa", None, "JPA persistence with Hibernate"),
    ("data-mongodb", BOOT, "spring-boot-starter-data-mongodb", None, "MongoDB document store"),
    ("data-redis", BOOT, "spring-boot-starter-data-redis", None, "Redis key-value store"),
    ("devtools", BOOT, "spring-boot-devtools", Some("runtime"), "Restart and live reload during development"),
    ("flyway", "org.flywaydb", "flyway-core", None, "Versioned database migrations"),
    ("h2", "com.h2database", "h2", Some("runtime"), "In-memory H2 database"),
    ("kafka", "org.springframework.kafka", "spring-kafka", None, "Apache Kafka messaging"),
    ("liquibase", "org.liquibase", "liquibase-core", None, "Database change management"),
    ("lombok", "org.projectlombok", "lombok", Some("provided"), "Boilerplate-reducing annotations"),
    ("mail", BOOT, "spring-boot-starter-mail", None, "Send email with JavaMailSender"),
    ("mysql", "com.mysql", "mysql-connector-j", Some("runtime"), "MySQL JDBC driver"),
    ("oauth2-resource-server", BOOT, "spring-boot-starter-oauth2-resource-server", None, "JWT bearer token validation"),
    ("postgresql", "org.postgresql", "postgresql", Some("runtime"), "PostgreSQL JDBC driver"),
    ("security", BOOT, "spring-boot-starter-security", None, "Authentication and access control"),
    ("test", BOOT, "spring-boot-starter-test", Some("test"), "JUnit, AssertJ and Mockito"),
    ("testcontainers", "org.testcontainers", "junit-jupiter", Some("test"), "Throwaway containers for integration tests"),
    ("thymeleaf", BOOT, "spring-boot-starter-thymeleaf", None, "Server-side HTML templates"),
    ("validation", BOOT, "spring-boot-starter-validation", None, "Bean Validation with Hibernate Validator"),
    ("web", BOOT, "spring-boot-starter-web", None, "Servlet web applications with Spring MVC"),
    ("webflux", BOOT, "spring-boot-starter-webflux", None, "Reactive web applications"),
];

/// Dependency catalog backed by an ordered map.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl BuiltinCatalog {
    /// The compiled-in table.
    pub fn new() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|&(id, group, artifact, scope, description)| {
                let mut coordinate = Coordinate::new(group, artifact);
                coordinate.scope = scope.map(String::from);
                (
                    id.to_string(),
                    CatalogEntry {
                        id: id.to_string(),
                        coordinate,
                        description: description.to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// The compiled-in table plus the entries of an optional TOML file.
    #[instrument]
    pub fn load(extra: Option<&Path>) -> KilnResult<Self> {
        let mut catalog = Self::new();
        if let Some(path) = extra {
            let added = CatalogLoader::new(path).load()?;
            info!(path = %path.display(), entries = added.len(), "Catalog file merged");
            catalog.merge(added);
        }
        Ok(catalog)
    }

    /// Add entries, replacing existing ones with the same id.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) {
        for entry in entries {
            if self.entries.contains_key(&entry.id) {
                debug!(id = %entry.id, "Catalog entry overridden");
            }
            self.entries.insert(entry.id.clone(), entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyCatalog for BuiltinCatalog {
    fn lookup(&self, id: &str) -> Option<Coordinate> {
        self.entries.get(id).map(|e| e.coordinate.clone())
    }

    fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ids_are_unique() {
        assert_eq!(BuiltinCatalog::new().len(), BUILTIN.len());
    }

    #[test]
    fn web_resolves_to_the_starter() {
        let web = BuiltinCatalog::new().lookup("web").unwrap();
        assert_eq!(web.group_id, "org.springframework.boot");
        assert_eq!(web.artifact_id, "spring-boot-starter-web");
        assert!(web.version.is_none());
    }

    #[test]
    fn test_starter_is_test_scoped() {
        let test = BuiltinCatalog::new().lookup("test").unwrap();
        assert_eq!(test.scope.as_deref(), Some("test"));
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(BuiltinCatalog::new().lookup("warp-drive").is_none());
    }

    #[test]
    fn entries_are_sorted_by_id() {
        let ids: Vec<_> = BuiltinCatalog::new()
            .entries()
            .into_iter()
            .map(|e| e.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn merge_overrides_by_id() {
        let mut catalog = BuiltinCatalog::new();
        let before = catalog.len();
        catalog.merge([CatalogEntry {
            id: "web".into(),
            coordinate: Coordinate::new("com.acme", "acme-web").with_version("9.9"),
            description: "Patched web stack".into(),
        }]);

        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.lookup("web").unwrap().artifact_id, "acme-web");
    }
}
