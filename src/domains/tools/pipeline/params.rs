//! Query parameter marshalling.
//!
//! Presence policy for a declared parameter:
//!
//! | argument              | result                       |
//! |-----------------------|------------------------------|
//! | missing, `null`, `""` | absent                       |
//! | other string          | sent verbatim                |
//! | number, boolean       | sent as its JSON rendering   |
//! | array, object         | sent as compact JSON text    |
//!
//! `0` and `false` are present values. Nothing is validated against the
//! enumerations some descriptions document; the remote service decides.

use serde_json::{Map, Value};

use crate::domains::tools::definitions::ParamSpec;

/// Ordered query parameters for one request. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Build the query from caller arguments, in declaration order.
    ///
    /// Arguments not declared in `specs` are ignored.
    pub fn build(arguments: &Map<String, Value>, specs: &[ParamSpec]) -> Self {
        let pairs = specs
            .iter()
            .filter_map(|spec| {
                arguments
                    .get(spec.name)
                    .and_then(present_value)
                    .map(|value| (spec.name.to_string(), value))
            })
            .collect();

        Self { pairs }
    }

    /// Value sent for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove `name` from the query and return its value.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(key, _)| key == name)?;
        Some(self.pairs.remove(index).1)
    }

    /// Parameter names in order.
    pub fn names(&self) -> Vec<&str> {
        self.pairs.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `application/x-www-form-urlencoded` rendering, without the leading `?`.
    pub fn encode(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.pairs)
    }
}

fn present_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SPECS: &[ParamSpec] = &[
        ParamSpec::optional("word", "Word"),
        ParamSpec::optional("partOfSpeech", "Part of speech"),
        ParamSpec::optional("limit", "Limit"),
        ParamSpec::optional("useCanonical", "Canonical"),
    ];

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_and_null_are_dropped() {
        let query = QueryParams::build(
            &args(json!({"word": "cat", "partOfSpeech": "", "limit": null})),
            SPECS,
        );
        assert_eq!(query.names(), vec!["word"]);
        assert_eq!(query.get("partOfSpeech"), None);
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let query = QueryParams::build(
            &args(json!({"useCanonical": "true", "limit": "5", "word": "cats"})),
            SPECS,
        );
        assert_eq!(query.names(), vec!["word", "limit", "useCanonical"]);
    }

    #[test]
    fn test_zero_and_false_are_present() {
        let query = QueryParams::build(&args(json!({"limit": 0, "useCanonical": false})), SPECS);
        assert_eq!(query.get("limit"), Some("0"));
        assert_eq!(query.get("useCanonical"), Some("false"));
    }

    #[test]
    fn test_undeclared_arguments_are_ignored() {
        let query = QueryParams::build(&args(json!({"word": "cat", "api_key": "x"})), SPECS);
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("api_key"), None);
    }

    #[test]
    fn test_values_pass_through_unvalidated() {
        let query = QueryParams::build(
            &args(json!({"partOfSpeech": "not-a-real-pos", "word": " spaced "})),
            SPECS,
        );
        assert_eq!(query.get("partOfSpeech"), Some("not-a-real-pos"));
        assert_eq!(query.get("word"), Some(" spaced "));
    }

    #[test]
    fn test_take_removes_parameter() {
        let mut query = QueryParams::build(&args(json!({"word": "cat", "limit": "2"})), SPECS);
        assert_eq!(query.take("word").as_deref(), Some("cat"));
        assert_eq!(query.take("word"), None);
        assert_eq!(query.names(), vec!["limit"]);
    }

    #[test]
    fn test_encode() {
        let query = QueryParams::build(
            &args(json!({"word": "ice cream", "partOfSpeech": "noun,verb"})),
            SPECS,
        );
        assert_eq!(
            query.encode().unwrap(),
            "word=ice+cream&partOfSpeech=noun%2Cverb"
        );
        assert!(QueryParams::default().encode().unwrap().is_empty());
    }
}
