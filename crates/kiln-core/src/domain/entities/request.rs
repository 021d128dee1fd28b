//! Request model: what the caller asks Kiln to generate.
//!
//! These are plain data carriers. The only behaviour living here is the
//! defaulting used by accessors and the two population predicates on
//! [`CrossCuttingLibraryRequest`]; every business rule is enforced by
//! [`crate::domain::DomainValidator`].

use serde::{Deserialize, Serialize};

/// Runtime version used when the request leaves it blank.
pub const DEFAULT_JAVA_VERSION: &str = "17";

/// Framework version used when the request leaves it blank.
pub const DEFAULT_BOOT_VERSION: &str = "3.2.5";

/// Dependency roles every cross-cutting library must provide.
pub const REQUIRED_ROLES: [&str; 3] = ["domain", "application", "persistence"];

/// A full description of the project to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Display name; falls back to the artifact id.
    pub name: Option<String>,
    pub description: String,
    pub java_version: String,
    pub boot_version: String,
    /// Selected dependency ids in the order the caller listed them.
    pub dependencies: Vec<String>,
    pub cross_cutting: Option<CrossCuttingLibraryRequest>,
    pub environment: Option<EnvironmentalCredentialsRequest>,
}

impl ProjectRequest {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.dependencies.push(id.into());
        self
    }

    pub fn with_cross_cutting(mut self, library: CrossCuttingLibraryRequest) -> Self {
        self.cross_cutting = Some(library);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentalCredentialsRequest) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.artifact_id,
        }
    }

    pub fn java_version(&self) -> &str {
        non_blank_or(&self.java_version, DEFAULT_JAVA_VERSION)
    }

    pub fn boot_version(&self) -> &str {
        non_blank_or(&self.boot_version, DEFAULT_BOOT_VERSION)
    }

    /// Dependency ids with duplicates removed, first occurrence wins.
    pub fn unique_dependencies(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.dependencies
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty() && seen.insert(*d))
            .collect()
    }

    /// Group id segments, one per package directory.
    pub fn group_segments(&self) -> impl Iterator<Item = &str> {
        self.group_id.split('.')
    }
}

/// Descriptor of a shared, separately versioned library the project builds on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrossCuttingLibraryRequest {
    pub group_id: String,
    pub name: String,
    pub version: String,
    /// Dependency roles, e.g. `domain`, `application`, `persistence`.
    pub dependencies: Vec<String>,
}

impl CrossCuttingLibraryRequest {
    pub fn new(
        group_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        dependencies: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            name: name.into(),
            version: version.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }

    /// True if any field carries a value.
    pub fn is_populated(&self) -> bool {
        !self.group_id.is_empty()
            || !self.name.is_empty()
            || !self.version.is_empty()
            || !self.dependencies.is_empty()
    }

    /// True if every scalar field is set and at least one role is listed.
    pub fn is_fully_populated(&self) -> bool {
        !self.group_id.is_empty()
            && !self.name.is_empty()
            && !self.version.is_empty()
            && !self.dependencies.is_empty()
    }

    /// Required roles absent from `dependencies`, in canonical order.
    pub fn missing_roles(&self) -> Vec<&'static str> {
        REQUIRED_ROLES
            .iter()
            .copied()
            .filter(|role| !self.dependencies.iter().any(|d| d == role))
            .collect()
    }
}

/// Environment profile settings rendered into Spring property files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentalCredentialsRequest {
    pub application_name: String,
    pub server_port: String,
    pub banner_mode: String,
    pub datasource_url: String,
    pub datasource_username: String,
    pub datasource_password: String,
    pub dev: bool,
    pub test: bool,
    pub uat: bool,
    pub prod: bool,
}

impl Default for EnvironmentalCredentialsRequest {
    fn default() -> Self {
        Self {
            application_name: String::new(),
            server_port: String::new(),
            banner_mode: String::new(),
            datasource_url: String::new(),
            datasource_username: String::new(),
            datasource_password: String::new(),
            dev: true,
            test: true,
            uat: true,
            prod: true,
        }
    }
}

impl EnvironmentalCredentialsRequest {
    pub fn server_port(&self) -> &str {
        non_blank_or(&self.server_port, "8080")
    }

    pub fn banner_mode(&self) -> &str {
        non_blank_or(&self.banner_mode, "off")
    }

    /// Enabled profiles in the order they are emitted.
    pub fn profiles(&self) -> Vec<&'static str> {
        [
            ("dev", self.dev),
            ("test", self.test),
            ("uat", self.uat),
            ("prod", self.prod),
        ]
        .into_iter()
        .filter_map(|(name, enabled)| enabled.then_some(name))
        .collect()
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_artifact() {
        let mut req = ProjectRequest::new("com.example", "demo", "1.0.0");
        assert_eq!(req.display_name(), "demo");

        req.name = Some("  ".into());
        assert_eq!(req.display_name(), "demo");

        req.name = Some("Demo Service".into());
        assert_eq!(req.display_name(), "Demo Service");
    }

    #[test]
    fn blank_versions_use_defaults() {
        let req = ProjectRequest::new("com.example", "demo", "1.0.0");
        assert_eq!(req.java_version(), DEFAULT_JAVA_VERSION);
        assert_eq!(req.boot_version(), DEFAULT_BOOT_VERSION);
    }

    #[test]
    fn unique_dependencies_keeps_first_occurrence() {
        let req = ProjectRequest::new("g", "a", "1")
            .with_dependency("web")
            .with_dependency("jpa")
            .with_dependency("web")
            .with_dependency(" ");
        assert_eq!(req.unique_dependencies(), vec!["web", "jpa"]);
    }

    #[test]
    fn empty_cross_cutting_is_not_populated() {
        let lib = CrossCuttingLibraryRequest::default();
        assert!(!lib.is_populated());
        assert!(!lib.is_fully_populated());
    }

    #[test]
    fn single_field_populates_but_does_not_complete() {
        let lib = CrossCuttingLibraryRequest {
            version: "1.0".into(),
            ..Default::default()
        };
        assert!(lib.is_populated());
        assert!(!lib.is_fully_populated());
    }

    #[test]
    fn missing_roles_reports_in_canonical_order() {
        let lib = CrossCuttingLibraryRequest::new("com.x", "ccl", "1.0", ["application"]);
        assert_eq!(lib.missing_roles(), vec!["domain", "persistence"]);
    }

    #[test]
    fn environment_defaults() {
        let env = EnvironmentalCredentialsRequest::default();
        assert_eq!(env.server_port(), "8080");
        assert_eq!(env.banner_mode(), "off");
        assert_eq!(env.profiles(), vec!["dev", "test", "uat", "prod"]);
    }

    #[test]
    fn request_deserializes_from_camel_case_json() {
        let json = r#"{
            "groupId": "com.example",
            "artifactId": "demo",
            "version": "1.0.0",
            "dependencies": ["web"],
            "crossCutting": { "groupId": "com.x", "name": "ccl", "version": "1.0",
                              "dependencies": ["domain"] },
            "environment": { "serverPort": "9090", "uat": false }
        }"#;
        let req: ProjectRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.group_id, "com.example");
        assert_eq!(req.dependencies, vec!["web"]);
        assert_eq!(req.cross_cutting.unwrap().name, "ccl");

        let env = req.environment.unwrap();
        assert_eq!(env.server_port(), "9090");
        assert_eq!(env.profiles(), vec!["dev", "test", "prod"]);
    }
}
