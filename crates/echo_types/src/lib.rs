//! Shared contract types for the echo demo.
//!
//! This crate is the Rust counterpart of the backend's declared OpenAPI
//! contract: the request/response payload types plus the [`ApiOperation`]
//! trait that binds a request type to its response type and path. The client
//! layer is generic over `ApiOperation`, so adding a backend operation means
//! adding a type here and implementing the trait.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Marks a type as a request payload for one declared backend operation.
///
/// The operation name is automatically derived from the short type name.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use echo_types::ApiOperation;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Ping;
///
/// impl ApiOperation for Ping {
///     type Response = serde_json::Value;
///     const PATH: &'static str = "/api/ping";
/// }
///
/// assert_eq!(Ping::operation_name(), "Ping");
/// ```
pub trait ApiOperation: Serialize + Clone + Debug + Send + Sync + 'static {
    /// The response type the backend declares for this operation.
    type Response: DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Path the operation is POSTed to, relative to the base URL.
    const PATH: &'static str;

    /// Returns the operation name, derived from the short type name.
    fn operation_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Request body for the echo operation.
///
/// Derived fresh from UI state on every input change; it has no identity or
/// lifecycle of its own.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EchoRequest {
    pub name: String,
    pub numbers: Vec<i64>,
}

/// Response body for the echo operation.
///
/// The shape is implementation-defined by the backend and rendered verbatim,
/// so it stays an opaque JSON value rather than a struct this crate would
/// have to keep in sync.
pub type EchoResponse = serde_json::Value;

impl ApiOperation for EchoRequest {
    type Response = EchoResponse;
    const PATH: &'static str = "/api/demo/echo";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_auto_name() {
        assert_eq!(EchoRequest::operation_name(), "EchoRequest");
    }

    #[test]
    fn test_echo_operation_path() {
        assert_eq!(EchoRequest::PATH, "/api/demo/echo");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = EchoRequest {
            name: "Ada".to_string(),
            numbers: vec![1, 2, 3],
        };

        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(
            value,
            serde_json::json!({ "name": "Ada", "numbers": [1, 2, 3] })
        );
    }

    #[test]
    fn test_nested_type_short_name() {
        mod inner {
            use serde::{Deserialize, Serialize};

            #[derive(Clone, Debug, Serialize, Deserialize)]
            pub struct Probe;

            impl crate::ApiOperation for Probe {
                type Response = serde_json::Value;
                const PATH: &'static str = "/probe";
            }
        }

        use crate::ApiOperation;
        assert_eq!(inner::Probe::operation_name(), "Probe");
    }
}
