//! Content synthesis: turns a validated request into file contents.
//!
//! ```text
//! ProjectRequest ──┐
//!                  ├─► ContentSynthesizer ─► SynthesizedContent
//! Resolved deps ───┘        (fixed templates + RenderContext)
//! ```
//!
//! The synthesizer is pure. Dependency lookup happens before it is called
//! (see `application::ports::DependencyCatalog`), so the domain never talks
//! to a catalog directly.

mod context;
mod templates;

pub use context::RenderContext;

use tracing::{debug, instrument};

use crate::domain::{
    entities::request::{
        CrossCuttingLibraryRequest, EnvironmentalCredentialsRequest, ProjectRequest,
    },
    value_objects::{Coordinate, MarkupPolicy, ResolvedDependency, is_xml_char},
};

/// Rendered file contents for one project, before any layout is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedContent {
    /// `pom.xml`.
    pub build_descriptor: String,
    /// `Application.java`.
    pub entry_point: String,
    /// `(file name, body)` pairs for `src/main/resources`.
    pub resources: Vec<(String, String)>,
}

/// Renders the fixed templates from request fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSynthesizer {
    policy: MarkupPolicy,
}

impl ContentSynthesizer {
    pub fn new(policy: MarkupPolicy) -> Self {
        Self { policy }
    }

    #[instrument(skip_all, fields(artifact = %request.artifact_id))]
    pub fn synthesize(
        &self,
        request: &ProjectRequest,
        dependencies: &[ResolvedDependency],
    ) -> SynthesizedContent {
        let resources = request
            .environment
            .as_ref()
            .map(|env| self.render_profiles(request, env))
            .unwrap_or_default();

        debug!(
            dependencies = dependencies.len(),
            resources = resources.len(),
            "content synthesized"
        );

        SynthesizedContent {
            build_descriptor: self.render_build_descriptor(request, dependencies),
            entry_point: self.render_entry_point(request),
            resources,
        }
    }

    /// Render `pom.xml`.
    pub fn render_build_descriptor(
        &self,
        request: &ProjectRequest,
        dependencies: &[ResolvedDependency],
    ) -> String {
        let mut section = String::new();
        for dependency in dependencies {
            match dependency {
                ResolvedDependency::Known { coordinate, .. } => {
                    section.push_str(&self.render_dependency(coordinate));
                }
                ResolvedDependency::Unknown { id } => {
                    let ctx = RenderContext::new().with_variable("ID", self.comment_text(id));
                    section.push_str(&ctx.render(templates::UNRESOLVED_DEPENDENCY));
                }
            }
        }

        if let Some(library) = request.cross_cutting.as_ref().filter(|l| l.is_populated()) {
            for coordinate in cross_cutting_coordinates(library) {
                section.push_str(&self.render_dependency(&coordinate));
            }
        }

        let ctx = RenderContext::new()
            .with_variable("GROUP_ID", self.markup(&request.group_id))
            .with_variable("ARTIFACT_ID", self.markup(&request.artifact_id))
            .with_variable("VERSION", self.markup(&request.version))
            .with_variable("NAME", self.markup(request.display_name()))
            .with_variable("DESCRIPTION", self.markup(&request.description))
            .with_variable("JAVA_VERSION", self.markup(request.java_version()))
            .with_variable("BOOT_VERSION", self.markup(request.boot_version()))
            .with_variable("DEPENDENCIES", section);

        ctx.render(templates::POM_XML)
    }

    /// Render `Application.java` in the group id's package.
    pub fn render_entry_point(&self, request: &ProjectRequest) -> String {
        RenderContext::new()
            .with_variable("PACKAGE", request.group_id.as_str())
            .render(templates::APPLICATION_JAVA)
    }

    /// Render `application.properties` plus one file per enabled profile.
    pub fn render_profiles(
        &self,
        request: &ProjectRequest,
        env: &EnvironmentalCredentialsRequest,
    ) -> Vec<(String, String)> {
        let application_name = if env.application_name.trim().is_empty() {
            request.artifact_id.as_str()
        } else {
            env.application_name.as_str()
        };

        let profiles = env.profiles();
        let mut base = RenderContext::new()
            .with_variable("APPLICATION_NAME", application_name)
            .with_variable("SERVER_PORT", env.server_port())
            .with_variable("BANNER_MODE", env.banner_mode())
            .render(templates::APPLICATION_PROPERTIES);
        if let Some(first) = profiles.first() {
            base.push_str(&format!("spring.profiles.active={first}\n"));
        }

        let mut files = vec![("application.properties".to_string(), base)];
        for profile in profiles {
            let body = if profile == "dev" {
                RenderContext::new()
                    .with_variable("DATASOURCE_URL", env.datasource_url.as_str())
                    .with_variable("DATASOURCE_USERNAME", env.datasource_username.as_str())
                    .with_variable("DATASOURCE_PASSWORD", env.datasource_password.as_str())
                    .render(templates::LOCAL_PROFILE_PROPERTIES)
            } else {
                templates::DEPLOYED_PROFILE_PROPERTIES.to_string()
            };
            files.push((format!("application-{profile}.properties"), body));
        }
        files
    }

    fn render_dependency(&self, coordinate: &Coordinate) -> String {
        let mut extra = String::new();
        if let Some(version) = &coordinate.version {
            extra.push_str(&format!(
                "            <version>{}</version>\n",
                self.markup(version)
            ));
        }
        if let Some(scope) = &coordinate.scope {
            extra.push_str(&format!("            <scope>{}</scope>\n", self.markup(scope)));
        }

        RenderContext::new()
            .with_variable("GROUP_ID", self.markup(&coordinate.group_id))
            .with_variable("ARTIFACT_ID", self.markup(&coordinate.artifact_id))
            .with_variable("EXTRA", extra)
            .render(templates::DEPENDENCY)
    }

    fn markup(&self, value: &str) -> String {
        self.policy.apply(value).into_owned()
    }

    /// XML comments may not contain `--`.
    fn comment_text(&self, id: &str) -> String {
        match self.policy {
            MarkupPolicy::Literal => id.to_string(),
            MarkupPolicy::Escape => {
                let mut out = String::with_capacity(id.len());
                for ch in id.chars().filter(|c| is_xml_char(*c)) {
                    if ch == '-' && out.ends_with('-') {
                        continue;
                    }
                    out.push(ch);
                }
                out
            }
        }
    }
}

/// One coordinate per distinct role: `<group>:<name>-<role>:<version>`.
pub fn cross_cutting_coordinates(library: &CrossCuttingLibraryRequest) -> Vec<Coordinate> {
    let mut seen = std::collections::HashSet::new();
    library
        .dependencies
        .iter()
        .filter(|role| !role.is_empty() && seen.insert(role.as_str()))
        .map(|role| {
            Coordinate::new(&library.group_id, format!("{}-{}", library.name, role))
                .with_version(&library.version)
        })
        .collect()
}
