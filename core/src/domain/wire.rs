//! Wire form of API requests
//!
//! Requests are flattened into an ordered list of `name -> value` pairs before
//! they reach the HTTP collaborator. Optional fields that are unset are never
//! pushed, so absence on the wire always means "let the server decide".

use serde::Serialize;
use std::fmt;

/// The remote operation a request is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Start a standard verification
    Verify,
    /// Start a PSD2 payment-confirmation verification
    Psd2,
    /// Check a code entered by the user
    Check,
    /// Look up one or more verification requests
    Search,
    /// Cancel or advance a running verification
    Control,
}

impl Operation {
    /// Path of the operation relative to the API base URI
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Verify => "/verify/json",
            Operation::Psd2 => "/verify/psd2/json",
            Operation::Check => "/verify/check/json",
            Operation::Search => "/verify/search/json",
            Operation::Control => "/verify/control/json",
        }
    }

    /// Short identifier used in logs and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Verify => "verify",
            Operation::Psd2 => "psd2",
            Operation::Check => "check",
            Operation::Search => "search",
            Operation::Control => "control",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single serialized parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WireValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Text(value) => f.write_str(value),
            WireValue::Integer(value) => write!(f, "{}", value),
            WireValue::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::Text(value)
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::Text(value.to_string())
    }
}

impl From<u32> for WireValue {
    fn from(value: u32) -> Self {
        WireValue::Integer(i64::from(value))
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Integer(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Decimal(value)
    }
}

/// Ordered wire parameters of one request
///
/// A name may appear more than once (e.g. `request_ids` in a multi-id search).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WireParams(Vec<(&'static str, WireValue)>);

impl WireParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter
    pub fn push(&mut self, name: &'static str, value: impl Into<WireValue>) {
        self.0.push((name, value.into()));
    }

    /// Append a parameter only when a value is present
    pub fn push_opt<V: Into<WireValue>>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    /// First value stored under `name`
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        self.0.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }

    /// All values stored under `name`, in insertion order
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a WireValue> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Parameter names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &WireValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render every value as a string, ready for form encoding
    pub fn to_form_pairs(&self) -> Vec<(&'static str, String)> {
        self.0
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }
}

/// A request in wire form, as handed to the HTTP collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Target operation
    pub operation: Operation,
    /// Serialized parameters
    pub params: WireParams,
}

impl ApiRequest {
    pub fn new(operation: Operation, params: WireParams) -> Self {
        Self { operation, params }
    }
}

/// Anything that can be submitted to one of the Verify operations
pub trait WireRequest {
    /// The operation this request is sent to
    fn operation(&self) -> Operation;

    /// Flatten the request into wire parameters, skipping unset fields
    fn to_wire_params(&self) -> WireParams;

    /// Build the collaborator request
    fn to_api_request(&self) -> ApiRequest {
        ApiRequest::new(self.operation(), self.to_wire_params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_paths() {
        assert_eq!(Operation::Verify.path(), "/verify/json");
        assert_eq!(Operation::Psd2.path(), "/verify/psd2/json");
        assert_eq!(Operation::Check.path(), "/verify/check/json");
        assert_eq!(Operation::Search.path(), "/verify/search/json");
        assert_eq!(Operation::Control.path(), "/verify/control/json");
        assert_eq!(Operation::Psd2.to_string(), "psd2");
    }

    #[test]
    fn test_push_opt_skips_none() {
        let mut params = WireParams::new();
        params.push("number", "447700900999");
        params.push_opt::<u32>("code_length", None);
        params.push_opt("pin_expiry", Some(120u32));

        assert_eq!(params.len(), 2);
        assert!(!params.contains("code_length"));
        assert_eq!(params.get("pin_expiry"), Some(&WireValue::Integer(120)));
    }

    #[test]
    fn test_repeated_names_and_form_pairs() {
        let mut params = WireParams::new();
        params.push("request_ids", "a");
        params.push("request_ids", "b");
        params.push("amount", 10.31);

        let ids: Vec<String> = params.get_all("request_ids").map(|v| v.to_string()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(
            params.to_form_pairs(),
            vec![
                ("request_ids", "a".to_string()),
                ("request_ids", "b".to_string()),
                ("amount", "10.31".to_string()),
            ]
        );
    }
}
