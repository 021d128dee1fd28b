use crate::domain::{
    entities::{ProjectRequest, ProjectTree},
    error::{DomainError, ValidationReason},
};

/// Words a Java package segment may not be.
const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while", "_",
];

/// A single business rule. `Ok(())` lets evaluation continue.
type Rule = fn(&ProjectRequest) -> Result<(), DomainError>;

/// Request rules in evaluation order. The first failure wins.
const REQUEST_RULES: &[Rule] = &[
    coordinates_are_path_safe,
    cross_cutting_is_complete,
    cross_cutting_has_required_roles,
];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ProjectRequest) -> Result<(), DomainError> {
        REQUEST_RULES.iter().try_for_each(|rule| rule(request))
    }

    pub fn validate_project_tree(tree: &ProjectTree) -> Result<(), DomainError> {
        tree.validate()
    }
}

fn coordinates_are_path_safe(request: &ProjectRequest) -> Result<(), DomainError> {
    check_segment("artifact id", &request.artifact_id)?;

    if request.group_id.is_empty() {
        return Err(invalid_coordinates("group id must not be empty"));
    }
    for segment in request.group_segments() {
        if segment.is_empty() {
            return Err(invalid_coordinates(format!(
                "group id '{}' contains an empty segment",
                request.group_id
            )));
        }
        check_segment("group id", segment)?;
        check_package_segment(&request.group_id, segment)?;
    }
    Ok(())
}

/// The group id doubles as the Java package of the entry point.
fn check_package_segment(group_id: &str, segment: &str) -> Result<(), DomainError> {
    let mut chars = segment.chars();
    let starts_ok = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    let rest_ok = chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');

    if !starts_ok || !rest_ok {
        return Err(invalid_coordinates(format!(
            "group id '{group_id}' is not a valid Java package: '{segment}' is not an identifier"
        )));
    }
    if JAVA_RESERVED.contains(&segment) {
        return Err(invalid_coordinates(format!(
            "group id '{group_id}' is not a valid Java package: '{segment}' is a reserved word"
        )));
    }
    Ok(())
}

/// Rejects anything that could escape or split a single directory level.
fn check_segment(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(invalid_coordinates(format!("{field} must not be empty")));
    }
    if value.contains(['/', '\\']) {
        return Err(invalid_coordinates(format!(
            "{field} '{value}' must not contain path separators"
        )));
    }
    if value.contains("..") || value == "." {
        return Err(invalid_coordinates(format!(
            "{field} '{value}' must not contain traversal sequences"
        )));
    }
    if value.chars().any(char::is_control) {
        return Err(invalid_coordinates(format!(
            "{field} must not contain control characters"
        )));
    }
    Ok(())
}

fn cross_cutting_is_complete(request: &ProjectRequest) -> Result<(), DomainError> {
    match &request.cross_cutting {
        Some(library) if library.is_populated() && !library.is_fully_populated() => {
            Err(DomainError::validation(
                ValidationReason::IncompleteCrossCuttingLibrary,
                "incomplete cross-cutting library configuration",
            ))
        }
        _ => Ok(()),
    }
}

fn cross_cutting_has_required_roles(request: &ProjectRequest) -> Result<(), DomainError> {
    let Some(library) = request.cross_cutting.as_ref().filter(|l| l.is_fully_populated()) else {
        return Ok(());
    };

    let missing = library.missing_roles();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationReason::MissingRequiredRoles,
            format!("missing required dependency roles: {}", missing.join(", ")),
        ))
    }
}

fn invalid_coordinates(message: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationReason::InvalidCoordinates, message)
}
