//! Integration tests for kiln-core, through the public API only.

use std::io::Read;
use std::path::{Path, PathBuf};

use kiln_core::{
    domain::{
        ContentSynthesizer, DomainValidator, ResolvedDependency, TreeEntry,
        EnvironmentalCredentialsRequest,
    },
    prelude::*,
};
use quick_xml::{Reader, events::Event};

/// Storage that refuses everything; `preview` must never reach it.
struct NoStorage;

impl Filesystem for NoStorage {
    fn create_ephemeral_root(&self, name: &str) -> KilnResult<PathBuf> {
        panic!("unexpected allocation of {name}")
    }
    fn create_dir_all(&self, path: &Path) -> KilnResult<()> {
        panic!("unexpected mkdir {}", path.display())
    }
    fn write_file(&self, path: &Path, _content: &[u8]) -> KilnResult<()> {
        panic!("unexpected write {}", path.display())
    }
    fn exists(&self, _path: &Path) -> bool {
        false
    }
    fn read_dir(&self, path: &Path) -> KilnResult<Vec<DirEntry>> {
        panic!("unexpected read_dir {}", path.display())
    }
    fn open_file(&self, path: &Path) -> KilnResult<Box<dyn Read + Send>> {
        panic!("unexpected open {}", path.display())
    }
    fn remove_dir_all(&self, path: &Path) -> KilnResult<()> {
        panic!("unexpected remove {}", path.display())
    }
}

struct NoArchive;

impl ArchiveWriter for NoArchive {
    fn archive(&self, _fs: &dyn Filesystem, root: &Path) -> KilnResult<Vec<u8>> {
        panic!("unexpected archive of {}", root.display())
    }
    fn extension(&self) -> &'static str {
        "zip"
    }
}

struct WebOnly;

impl DependencyCatalog for WebOnly {
    fn lookup(&self, id: &str) -> Option<Coordinate> {
        (id == "web").then(|| Coordinate::new("org.springframework.boot", "spring-boot-starter-web"))
    }
    fn entries(&self) -> Vec<CatalogEntry> {
        Vec::new()
    }
}

fn service() -> GenerationService {
    GenerationService::new(Box::new(NoStorage), Box::new(NoArchive), Box::new(WebOnly))
}

/// Parse the whole document and return the text of every `<description>`.
fn parse_descriptions(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut inside = false;
    let mut found = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"description" => inside = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"description" => inside = false,
            Ok(Event::Text(t)) if inside => found.push(t.unescape().unwrap().into_owned()),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("pom.xml is not well-formed: {e}"),
        }
    }
    found
}

fn pom_of(request: &ProjectRequest) -> String {
    let tree = service().preview(request).unwrap();
    tree.files()
        .find(|f| f.path.to_string() == "pom.xml")
        .map(|f| f.content.clone())
        .unwrap()
}

#[test]
fn demo_project_layout() {
    let request = ProjectRequest::new("com.example", "demo", "1.0.0")
        .with_description("Demo")
        .with_dependency("web");
    let tree = service().preview(&request).unwrap();

    assert_eq!(tree.root(), "demo");
    let files: Vec<String> = tree.files().map(|f| f.path.to_string()).collect();
    assert_eq!(
        files,
        ["pom.xml", "src/main/java/com/example/Application.java"]
    );

    let dirs: Vec<String> = tree
        .entries()
        .iter()
        .filter_map(|e| match e {
            TreeEntry::Directory(d) => Some(d.to_string()),
            TreeEntry::File(_) => None,
        })
        .collect();
    assert!(dirs.contains(&"src/test/java/com/example".to_string()));
}

#[test]
fn escaped_description_round_trips_through_a_parser() {
    let description = r#"Tom & Jerry's <"best"> app"#;
    let pom = pom_of(
        &ProjectRequest::new("com.example", "demo", "1.0.0").with_description(description),
    );
    assert_eq!(parse_descriptions(&pom), [description]);
}

#[test]
fn unknown_dependency_keeps_document_well_formed() {
    let pom = pom_of(
        &ProjectRequest::new("com.example", "demo", "1.0.0")
            .with_description("Demo")
            .with_dependency("web")
            .with_dependency("not--a--thing"),
    );
    assert_eq!(parse_descriptions(&pom), ["Demo"]);
    assert!(pom.contains("spring-boot-starter-web"));
    assert!(pom.contains("unresolved dependency"));
}

#[test]
fn cross_cutting_library_adds_one_dependency_per_role() {
    let library = CrossCuttingLibraryRequest::new(
        "com.acme",
        "platform",
        "2.1.0",
        ["domain", "application", "persistence", "persistence"],
    );
    let pom = pom_of(
        &ProjectRequest::new("com.example", "demo", "1.0.0").with_cross_cutting(library),
    );

    for role in ["domain", "application", "persistence"] {
        let artifact = format!("<artifactId>platform-{role}</artifactId>");
        assert_eq!(pom.matches(&artifact).count(), 1, "{role}");
    }
    assert_eq!(pom.matches("<version>2.1.0</version>").count(), 3);
}

#[test]
fn incomplete_cross_cutting_library_is_rejected_before_synthesis() {
    let library = CrossCuttingLibraryRequest::new("com.acme", "", "2.1.0", ["domain"]);
    let request = ProjectRequest::new("com.example", "demo", "1.0.0").with_cross_cutting(library);

    let err = service().preview(&request).unwrap_err();
    assert_eq!(
        err.validation_reason(),
        Some(ValidationReason::IncompleteCrossCuttingLibrary)
    );
    assert_eq!(err.category(), kiln_core::error::ErrorCategory::Validation);
}

#[test]
fn missing_roles_are_listed_in_the_message() {
    let library = CrossCuttingLibraryRequest::new("com.acme", "platform", "2.1.0", ["domain"]);
    let request = ProjectRequest::new("com.example", "demo", "1.0.0").with_cross_cutting(library);

    let err = DomainValidator::validate_request(&request).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("missing required dependency roles"));
    assert!(message.contains("application"));
    assert!(message.contains("persistence"));
}

#[test]
fn path_escaping_coordinates_are_rejected() {
    for (group, artifact) in [("com.example", "../evil"), ("com/../x", "demo"), ("", "demo")] {
        let request = ProjectRequest::new(group, artifact, "1.0.0");
        let err = service().preview(&request).unwrap_err();
        assert_eq!(
            err.validation_reason(),
            Some(ValidationReason::InvalidCoordinates),
            "{group}:{artifact}"
        );
    }
}

#[test]
fn environment_adds_profile_resources() {
    let request = ProjectRequest::new("com.example", "demo", "1.0.0")
        .with_environment(EnvironmentalCredentialsRequest::default());
    let tree = service().preview(&request).unwrap();

    let resources: Vec<String> = tree
        .files()
        .map(|f| f.path.to_string())
        .filter(|p| p.starts_with("src/main/resources/"))
        .collect();
    assert!(resources.contains(&"src/main/resources/application.properties".to_string()));
    assert!(resources.len() > 1);
}

#[test]
fn synthesis_is_deterministic() {
    let request = ProjectRequest::new("com.example", "demo", "1.0.0")
        .with_description("Demo")
        .with_dependency("web");
    let deps = [ResolvedDependency::Unknown { id: "web".into() }];

    let synthesizer = ContentSynthesizer::default();
    assert_eq!(
        synthesizer.synthesize(&request, &deps),
        synthesizer.synthesize(&request, &deps)
    );
}
