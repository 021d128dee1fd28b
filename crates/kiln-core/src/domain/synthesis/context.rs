use std::collections::HashMap;

/// Context for template rendering.
///
/// A **Value Object** containing every value a fixed template may reference.
/// Immutable after creation; `with_variable` consumes and returns a new one.
///
/// ## Variable Naming Convention
///
/// Variables are `SCREAMING_SNAKE_CASE`, referenced as `{{NAME}}`.
///
/// ## Edge Cases
///
/// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
/// - `{{A}}{{A}}` → both replaced
/// - Substituted values are never scanned again, so a value that itself
///   contains `{{B}}` is emitted verbatim
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right scan; output length is bounded by the template
    /// plus the substituted values.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            match after_open.find("}}") {
                Some(end) => {
                    let key = &after_open[..end];
                    match self.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_variables() {
        let ctx = RenderContext::new().with_variable("GROUP_ID", "com.example");
        assert_eq!(ctx.render("<g>{{GROUP_ID}}</g>"), "<g>com.example</g>");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let ctx = RenderContext::new().with_variable("A", "x");
        assert_eq!(ctx.render("{{A}}-{{A}}"), "x-x");
    }

    #[test]
    fn unknown_placeholder_is_left_alone() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("a {{MISSING}} b"), "a {{MISSING}} b");
    }

    #[test]
    fn values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("A", "{{B}}")
            .with_variable("B", "boom");
        assert_eq!(ctx.render("{{A}}"), "{{B}}");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let ctx = RenderContext::new().with_variable("A", "x");
        assert_eq!(ctx.render("{{A}} {{A"), "x {{A");
    }

    #[test]
    fn maven_property_syntax_is_untouched() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.render("${java.version}"), "${java.version}");
    }
}
