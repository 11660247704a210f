/*
[INPUT]:  Method arguments, nested info maps and raw JSON documents
[OUTPUT]: Flat form-encoded parameter pairs with fail-first validation
[POS]:    HTTP layer - request parameter marshaling shared by all modules
[UPDATE]: When the form-encoding conventions of the remote API change
*/

use serde_json::Value;

use crate::http::{Result, RongCloudError};

/// A single form parameter value.
///
/// Arrays expand into `key[0]`, `key[1]`, … pairs, matching the
/// `http_build_query` convention the remote API expects.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParamValue {
    Str(String),
    Int(i64),
    List(Vec<String>),
}

impl ParamValue {
    /// Empty string, zero and empty list all count as "missing" for
    /// required-parameter validation.
    fn is_missing(&self) -> bool {
        match self {
            ParamValue::Str(s) => s.is_empty(),
            ParamValue::Int(n) => *n == 0,
            ParamValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered form-parameter builder.
///
/// `required` short-circuits on the first missing argument, in declaration
/// order, so callers chain it with `?`. Optional parameters are always sent
/// with their documented defaults; the remote API tolerates empty values.
#[derive(Debug, Clone, Default)]
pub(crate) struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a required parameter, failing if it is empty
    pub(crate) fn required(
        mut self,
        name: &'static str,
        value: impl Into<ParamValue>,
    ) -> Result<Self> {
        let value = value.into();
        if value.is_missing() {
            return Err(RongCloudError::MissingParameter(name));
        }
        self.pairs.push((name.to_string(), value));
        Ok(self)
    }

    /// Add an optional parameter; it is sent even when defaulted
    pub(crate) fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.pairs.push((name.to_string(), value.into()));
        self
    }

    /// Add a required nested info map, flattened into `prefix[key]` pairs.
    ///
    /// `name` is the argument name reported when the map is empty; `prefix`
    /// is the bracket prefix the endpoint expects (e.g. `chatroom`, `group`).
    pub(crate) fn required_nested(
        mut self,
        name: &'static str,
        prefix: &str,
        entries: &[(&str, &str)],
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(RongCloudError::MissingParameter(name));
        }
        for (key, value) in entries {
            self.pairs
                .push((format!("{prefix}[{key}]"), ParamValue::Str(value.to_string())));
        }
        Ok(self)
    }

    /// Parse a caller-supplied JSON document and flatten it into form pairs.
    ///
    /// Mirrors `http_build_query`: objects become `key[sub]`, arrays `key[i]`,
    /// booleans `1`/`0`, nulls are dropped.
    pub(crate) fn from_json(document: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        let mut flat = Vec::new();
        flatten_value(None, &value, &mut flat);
        Ok(Self {
            pairs: flat
                .into_iter()
                .map(|(k, v)| (k, ParamValue::Str(v)))
                .collect(),
        })
    }

    /// Expand into plain string pairs ready for form or query encoding
    pub(crate) fn into_pairs(self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.pairs.len());
        for (key, value) in self.pairs {
            match value {
                ParamValue::Str(s) => out.push((key, s)),
                ParamValue::Int(n) => out.push((key, n.to_string())),
                ParamValue::List(items) => {
                    for (index, item) in items.into_iter().enumerate() {
                        out.push((format!("{key}[{index}]"), item));
                    }
                }
            }
        }
        out
    }
}

fn flatten_value(prefix: Option<&str>, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_key = match prefix {
                    Some(p) => format!("{p}[{key}]"),
                    None => key.clone(),
                };
                flatten_value(Some(&child_key), child, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let child_key = match prefix {
                    Some(p) => format!("{p}[{index}]"),
                    None => index.to_string(),
                };
                flatten_value(Some(&child_key), child, out);
            }
        }
        Value::Null => {}
        Value::Bool(b) => {
            let rendered = if *b { "1" } else { "0" };
            out.push((prefix.unwrap_or_default().to_string(), rendered.to_string()));
        }
        Value::Number(n) => out.push((prefix.unwrap_or_default().to_string(), n.to_string())),
        Value::String(s) => out.push((prefix.unwrap_or_default().to_string(), s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_required_rejects_empty_string() {
        let err = Params::new().required("userId", "").unwrap_err();
        assert_eq!(err.missing_parameter(), Some("userId"));
    }

    #[rstest]
    #[case(ParamValue::Str(String::new()), true)]
    #[case(ParamValue::Str("x".to_string()), false)]
    #[case(ParamValue::Int(0), true)]
    #[case(ParamValue::Int(5), false)]
    #[case(ParamValue::List(vec![]), true)]
    #[case(ParamValue::List(vec!["a".to_string()]), false)]
    fn test_missing_detection(#[case] value: ParamValue, #[case] missing: bool) {
        assert_eq!(value.is_missing(), missing);
    }

    #[test]
    fn test_validation_short_circuits_in_declaration_order() {
        // Both are empty; the first declared one is reported
        let err = Params::new()
            .required("userId", "")
            .and_then(|p| p.required("groupId", ""))
            .unwrap_err();
        assert_eq!(err.missing_parameter(), Some("userId"));
    }

    #[test]
    fn test_optional_defaults_are_sent() {
        let pairs = Params::new()
            .with("pushContent", "")
            .with("isPersisted", 1)
            .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("pushContent".to_string(), String::new()),
                ("isPersisted".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_nested_info_flattens_with_prefix() {
        let pairs = Params::new()
            .required_nested("chatRoomInfo", "chatroom", &[("id", "r1"), ("name", "Room")])
            .expect("nested")
            .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("chatroom[id]".to_string(), "r1".to_string()),
                ("chatroom[name]".to_string(), "Room".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_nested_info_is_missing() {
        let err = Params::new()
            .required_nested("groupInfo", "group", &[])
            .unwrap_err();
        assert_eq!(err.missing_parameter(), Some("groupInfo"));
    }

    #[test]
    fn test_list_values_expand_indexed() {
        let tags: &[&str] = &["vip", "beta"];
        let pairs = Params::new()
            .required("tags", tags)
            .expect("tags")
            .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("tags[0]".to_string(), "vip".to_string()),
                ("tags[1]".to_string(), "beta".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_json_flattens_recursively() {
        let pairs = Params::from_json(
            r#"{"platform":["ios","android"],"audience":{"is_to_all":true,"tag":["x"]},"skip":null,"count":3}"#,
        )
        .expect("valid json")
        .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("audience[is_to_all]".to_string(), "1".to_string()),
                ("audience[tag][0]".to_string(), "x".to_string()),
                ("count".to_string(), "3".to_string()),
                ("platform[0]".to_string(), "ios".to_string()),
                ("platform[1]".to_string(), "android".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = Params::from_json("{not json").unwrap_err();
        assert!(matches!(err, RongCloudError::Payload(_)));
    }
}
