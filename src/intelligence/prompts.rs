//! Prompt construction and defensive response parsing.
//!
//! The service is asked for a JSON object with string keys `who` and
//! `mission`. Models do not always comply cleanly — payloads arrive inside
//! markdown fences, with surrounding prose, or with keys missing — so
//! parsing peels the JSON out of whatever wrapper it shipped in and treats
//! missing or empty keys as "no update for that field". Only a payload with
//! neither key (or no JSON at all) counts as a failure.

use crate::error::GenerateError;
use crate::intelligence::GeneratedIdentity;

/// Business description used when config doesn't override it.
pub const DEFAULT_BUSINESS_CONTEXT: &str =
    "una empresa llamada \"The White Order\" que importa iPhones y artículos de EE.UU.";

/// Build the generation prompt for the identity section.
pub fn build_identity_prompt(business_context: &str) -> String {
    format!(
        "Redacta una descripción profesional y minimalista para una sección \
         \"Quiénes Somos\" y \"Misión\" de {}. El tono debe ser elegante y \
         confiable. Devuelve un objeto JSON con las claves 'who' y 'mission'.",
        business_context
    )
}

/// Parse the model's text into a [`GeneratedIdentity`].
///
/// Empty or whitespace-only values are demoted to absent — the original
/// page treated blank generated copy as "nothing to apply" and so do we.
pub fn parse_identity_response(text: &str) -> Result<GeneratedIdentity, GenerateError> {
    let json = extract_json_object(text).ok_or_else(|| {
        GenerateError::SchemaViolation("no JSON object in model output".to_string())
    })?;

    let raw: GeneratedIdentity = serde_json::from_str(json)
        .map_err(|e| GenerateError::SchemaViolation(format!("invalid JSON: {}", e)))?;

    let identity = GeneratedIdentity {
        who: normalize(raw.who),
        mission: normalize(raw.mission),
    };

    if identity.who.is_none() && identity.mission.is_none() {
        return Err(GenerateError::SchemaViolation(
            "neither 'who' nor 'mission' present".to_string(),
        ));
    }
    Ok(identity)
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Locate a JSON object inside the model output.
///
/// Checks a ```json fence first, then a bare object, then scans for the
/// first balanced `{...}` embedded in surrounding prose (string-literal and
/// escape aware so braces inside values don't end the scan early).
fn extract_json_object(text: &str) -> Option<&str> {
    if let Some(fence_start) = text.find("```json") {
        let body = &text[fence_start + 7..];
        if let Some(end) = body.find("```") {
            return Some(body[..end].trim());
        }
    }

    let trimmed = text.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    let start = text.find('{')?;
    let candidate = &text[start..];
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escaped = false;
    for (i, ch) in candidate.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&candidate[..=i]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_context_and_keys() {
        let prompt = build_identity_prompt(DEFAULT_BUSINESS_CONTEXT);
        assert!(prompt.contains("The White Order"));
        assert!(prompt.contains("'who'"));
        assert!(prompt.contains("'mission'"));
    }

    #[test]
    fn parses_a_plain_json_object() {
        let identity =
            parse_identity_response(r#"{"who": "Somos A.", "mission": "Misión B."}"#).unwrap();
        assert_eq!(identity.who.as_deref(), Some("Somos A."));
        assert_eq!(identity.mission.as_deref(), Some("Misión B."));
    }

    #[test]
    fn parses_a_fenced_payload() {
        let text = "Claro, aquí está:\n```json\n{\"who\": \"A\", \"mission\": \"B\"}\n```\n";
        let identity = parse_identity_response(text).unwrap();
        assert_eq!(identity.who.as_deref(), Some("A"));
        assert_eq!(identity.mission.as_deref(), Some("B"));
    }

    #[test]
    fn parses_an_object_embedded_in_prose() {
        let text = "El resultado es {\"who\": \"A {con llaves}\", \"mission\": \"B\"} espero sirva";
        let identity = parse_identity_response(text).unwrap();
        assert_eq!(identity.who.as_deref(), Some("A {con llaves}"));
    }

    #[test]
    fn missing_mission_is_a_valid_partial() {
        let identity = parse_identity_response(r#"{"who": "A"}"#).unwrap();
        assert_eq!(identity.who.as_deref(), Some("A"));
        assert!(identity.mission.is_none());
    }

    #[test]
    fn empty_strings_are_demoted_to_absent() {
        let identity = parse_identity_response(r#"{"who": "A", "mission": "   "}"#).unwrap();
        assert_eq!(identity.who.as_deref(), Some("A"));
        assert!(identity.mission.is_none());
    }

    #[test]
    fn both_keys_missing_is_a_schema_violation() {
        let err = parse_identity_response(r#"{"unrelated": 1}"#).unwrap_err();
        assert!(matches!(err, GenerateError::SchemaViolation(_)));
    }

    #[test]
    fn non_json_output_is_a_schema_violation() {
        let err = parse_identity_response("Lo siento, no puedo ayudar con eso.").unwrap_err();
        assert!(matches!(err, GenerateError::SchemaViolation(_)));
    }

    #[test]
    fn unbalanced_braces_are_a_schema_violation() {
        let err = parse_identity_response("{\"who\": \"A\"").unwrap_err();
        assert!(matches!(err, GenerateError::SchemaViolation(_)));
    }
}
