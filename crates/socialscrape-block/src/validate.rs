use jsonschema::JSONSchema;
use serde_json::Value;

use crate::errors::{ValidationIssue, ValidationReport};
use crate::schema::{ScraperInput, input_json_schema};

/// Validate raw block input against the input JSON Schema and parse it,
/// applying field defaults.
pub fn validate_input(raw: &Value) -> Result<ScraperInput, ValidationReport> {
    let mut report = ValidationReport::default();

    let schema = match serde_json::to_value(input_json_schema()) {
        Ok(schema) => schema,
        Err(err) => {
            report.push_error(ValidationIssue::error(
                "schema_serialization_error",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    let compiled = match JSONSchema::compile(&schema) {
        Ok(compiled) => compiled,
        Err(err) => {
            report.push_error(ValidationIssue::error(
                "schema_compile_error",
                "/",
                err.to_string(),
            ));
            return Err(report);
        }
    };

    if let Err(errors) = compiled.validate(raw) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::error(
                "schema_violation",
                path,
                error.to_string(),
            ));
        }
    }

    if !report.is_ok() {
        return Err(report);
    }

    match serde_json::from_value(raw.clone()) {
        Ok(input) => Ok(input),
        Err(err) => {
            report.push_error(ValidationIssue::error(
                "invalid_input_json",
                "/",
                err.to_string(),
            ));
            Err(report)
        }
    }
}

fn normalized_json_pointer(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pointer_is_root() {
        assert_eq!(normalized_json_pointer(""), "/");
        assert_eq!(normalized_json_pointer("/max_posts"), "/max_posts");
    }
}
