//! Implementation of the `kiln new` command.
//!
//! Responsibility: turn CLI arguments (and an optional request file) into a
//! `ProjectRequest`, call the core generation service, and write the archive
//! where the user asked. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use kiln_adapters::{BuiltinCatalog, LocalFilesystem, ZipArchiver};
use kiln_core::{
    application::{ArchiveWriter, GenerationService},
    domain::{MarkupPolicy, ProjectRequest},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `kiln new` command.
///
/// 1. Build the request: request file, then flags, then config defaults
/// 2. Wire the adapters into a `GenerationService`
/// 3. `--dry-run`: print the tree and stop
/// 4. Refuse to clobber an existing archive unless `--force`
/// 5. Generate and write the archive
#[instrument(skip_all, fields(request = ?args.request))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Request
    let request = build_request(&args, &config)?;
    debug!(
        group = %request.group_id,
        artifact = %request.artifact_id,
        dependencies = request.dependencies.len(),
        "Request resolved"
    );

    // 2. Adapters
    let archiver = ZipArchiver::new();
    let file_name = format!("{}.{}", request.artifact_id, archiver.extension());
    let service = build_service(&config, args.markup.map(MarkupPolicy::from), archiver)?;

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let tree = service.preview(&request)?;
        output.info(&format!(
            "Dry run: would generate {file_name} with {} files",
            tree.file_count()
        ))?;
        for file in tree.files() {
            output.print(&format!("  {}/{}", tree.root(), file.path))?;
        }
        return Ok(());
    }

    // 4. Destination
    let destination = resolve_output_path(args.output.as_deref(), &file_name);
    if destination.exists() && !args.force {
        return Err(CliError::OutputExists { path: destination });
    }

    // 5. Generate + write
    output.header(&format!("Generating '{}'...", request.artifact_id))?;
    let archive = service.generate(&request)?;
    write_archive(&destination, &archive.bytes)?;

    info!(
        path = %destination.display(),
        bytes = archive.len(),
        "Archive written"
    );

    output.success(&format!("Project '{}' generated!", request.artifact_id))?;
    if !global.quiet {
        output.field("Archive", &destination.display().to_string())?;
        output.field("Size", &format!("{} bytes", archive.len()))?;
        output.field(
            "Coordinates",
            &format!(
                "{}:{}:{}",
                request.group_id, request.artifact_id, request.version
            ),
        )?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  unzip {}", destination.display()))?;
        output.print(&format!("  cd {} && mvn spring-boot:run", request.artifact_id))?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

/// Merge the request file, the flags and the configured defaults.
///
/// Flags replace scalar fields from the file; `--dependency` values are
/// appended to the file's list.
pub fn build_request(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectRequest> {
    let mut request = match &args.request {
        Some(path) => read_request(path)?,
        None => ProjectRequest::default(),
    };

    if let Some(group) = &args.group {
        request.group_id = group.clone();
    }
    if let Some(artifact) = &args.artifact {
        request.artifact_id = artifact.clone();
    }
    if let Some(version) = &args.version {
        request.version = version.clone();
    }
    if let Some(name) = &args.name {
        request.name = Some(name.clone());
    }
    if let Some(description) = &args.description {
        request.description = description.clone();
    }
    if let Some(java) = &args.java {
        request.java_version = java.clone();
    }
    if let Some(boot) = &args.boot {
        request.boot_version = boot.clone();
    }
    request
        .dependencies
        .extend(args.dependencies.iter().map(|d| d.trim().to_string()));

    fill_blank(&mut request.version, &config.defaults.version);
    fill_blank(&mut request.java_version, &config.defaults.java_version);
    fill_blank(&mut request.boot_version, &config.defaults.boot_version);

    if request.group_id.trim().is_empty() {
        return Err(missing("group id", "--group"));
    }
    if request.artifact_id.trim().is_empty() {
        return Err(missing("artifact id", "--artifact"));
    }

    Ok(request)
}

fn read_request(path: &Path) -> CliResult<ProjectRequest> {
    if !path.exists() {
        return Err(CliError::RequestNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read request file '{}'", path.display()))?;

    serde_json::from_str(&raw).map_err(|e| CliError::InvalidInput {
        message: format!("request file '{}' is not a valid request: {e}", path.display()),
        source: Some(Box::new(e)),
    })
}

fn fill_blank(field: &mut String, default: &str) {
    if field.trim().is_empty() {
        *field = default.to_string();
    }
}

fn missing(what: &str, flag: &str) -> CliError {
    CliError::InvalidInput {
        message: format!("{what} is required (pass {flag} or set it in the request file)"),
        source: None,
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn build_service(
    config: &AppConfig,
    markup: Option<MarkupPolicy>,
    archiver: ZipArchiver,
) -> CliResult<GenerationService> {
    let catalog = BuiltinCatalog::load(config.generation.catalog.as_deref())?;

    Ok(GenerationService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(archiver),
        Box::new(catalog),
    )
    .with_markup_policy(markup.unwrap_or(config.generation.markup)))
}

// ── Output path ───────────────────────────────────────────────────────────────

/// Where the archive goes.
///
/// An existing directory receives `file_name`; any other path is taken as the
/// archive path itself. Without `--output` the archive lands in the current
/// directory.
pub fn resolve_output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(".").join(file_name),
    }
}

fn write_archive(destination: &Path, bytes: &[u8]) -> CliResult<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create output directory '{}'", parent.display())
        })?;
    }

    std::fs::write(destination, bytes)
        .with_cli_context(|| format!("Failed to write archive to '{}'", destination.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────
