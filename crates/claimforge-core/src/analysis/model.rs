//! Analysis wire models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClaimError, ClaimResult};

/// Body sent to `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub claim: String,
}

impl ClaimRequest {
    pub fn new(claim: impl Into<String>) -> Self {
        Self { claim: claim.into() }
    }
}

/// Result returned by the analysis service. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl AnalysisResult {
    /// Parse a raw response body.
    pub fn from_json_str(body: &str) -> ClaimResult<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ClaimError::Parse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Project an arbitrary JSON value onto the result shape.
    ///
    /// Fields with an unexpected type are dropped rather than rejected, so a
    /// server that sends `"score": "high"` still gets its summary rendered.
    /// A `null` body is a parse failure; other non-object bodies carry no
    /// fields.
    pub fn from_value(value: Value) -> ClaimResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Err(ClaimError::Parse("response body is null".to_string())),
            _ => return Ok(Self::default()),
        };

        let text = |key: &str| match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        };

        let flags = match map.get("flags") {
            Some(Value::Array(items)) => Some(items.iter().map(flag_text).collect()),
            _ => None,
        };

        let score = map.get("score").and_then(Value::as_f64);

        Ok(Self {
            summary: text("summary"),
            flags,
            score,
            response: text("response"),
        })
    }
}

fn flag_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ClaimRequest::new("water is wet")).unwrap();
        assert_eq!(body, json!({ "claim": "water is wet" }));
    }

    #[test]
    fn test_full_object() {
        let result = AnalysisResult::from_json_str(
            r#"{"summary":"ok","flags":["a","b"],"score":0.5,"response":"raw"}"#,
        )
        .unwrap();
        assert_eq!(result.summary.as_deref(), Some("ok"));
        assert_eq!(result.flags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(result.score, Some(0.5));
        assert_eq!(result.response.as_deref(), Some("raw"));
    }

    #[test]
    fn test_wrong_types_are_dropped() {
        let result = AnalysisResult::from_value(json!({
            "summary": 42,
            "flags": "not a list",
            "score": "high",
            "response": null
        }))
        .unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn test_flag_items_are_stringified() {
        let result = AnalysisResult::from_value(json!({ "flags": ["x", 3, null, true] })).unwrap();
        assert_eq!(
            result.flags,
            Some(vec!["x".to_string(), "3".to_string(), String::new(), "true".to_string()])
        );
    }

    #[test]
    fn test_integer_score() {
        let result = AnalysisResult::from_value(json!({ "score": 1 })).unwrap();
        assert_eq!(result.score, Some(1.0));
    }

    #[test]
    fn test_null_body_is_parse_error() {
        let err = AnalysisResult::from_json_str("null").unwrap_err();
        assert!(matches!(err, ClaimError::Parse(_)));
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = AnalysisResult::from_json_str("<html>502</html>").unwrap_err();
        assert!(matches!(err, ClaimError::Parse(_)));
    }

    #[test]
    fn test_array_body_is_empty_result() {
        let result = AnalysisResult::from_json_str("[1,2]").unwrap();
        assert_eq!(result, AnalysisResult::default());
    }
}
