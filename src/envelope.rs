//! The `{Success, Result}` wrapper every WestFax response uses.

use serde::{Deserialize, Serialize};

/// A decoded WestFax response envelope.
///
/// Every endpoint wraps its payload in `{"Success": bool, "Result": ...}`.
/// The service does not guarantee that `success` and an HTTP 200 agree, and
/// the client never interprets the flag — it is delivered alongside the
/// payload so the caller can decide what a service-reported failure means.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse<T> {
    /// Service-reported success flag, passed through uninterpreted.
    pub success: bool,
    /// The endpoint-specific payload.
    pub result: T,
}

impl<T> ApiResponse<T> {
    /// Whether the service reported the call as successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Consume the envelope and return the payload, discarding the flag.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.result
    }

    /// Map the payload to a different type, keeping the flag.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            result: f(self.result),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Returns true if the result list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Returns the number of records in the result list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// Returns an iterator over the records in the result list.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.result.iter()
    }
}

impl<T> IntoIterator for ApiResponse<Vec<T>> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ApiResponse<Vec<T>> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.result.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_string_payload() {
        let env: ApiResponse<String> =
            serde_json::from_str(r#"{"Success":true,"Result":"pong"}"#).unwrap();
        assert!(env.is_success());
        assert_eq!(env.into_inner(), "pong");
    }

    #[test]
    fn test_decode_list_payload() {
        let env: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"Success":false,"Result":[1,2,3]}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.len(), 3);
        assert_eq!(env.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_result_is_an_error() {
        let decoded = serde_json::from_str::<ApiResponse<String>>(r#"{"Success":true}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_map_keeps_flag() {
        let env = ApiResponse {
            success: true,
            result: vec!["a".to_string()],
        };
        let mapped = env.map(|v| v.len());
        assert!(mapped.success);
        assert_eq!(mapped.result, 1);
    }
}
