//! JSON-RPC formatting layer
//!
//! Turns raw JSON-RPC results into the ordered field records the status
//! dialog displays, and carries the catalog of demo methods the console can
//! issue. The dialog itself never touches raw JSON.

use crate::types::{ResponseField, RpcError, RpcResponse};
use serde_json::Value;

/// A JSON-RPC method the console can exercise.
pub struct RpcMethod {
    pub name: &'static str,
    pub icon: &'static str,
    /// Whether the result carries a signature validity flag.
    pub signs: bool,
}

pub const DEMO_METHODS: &[RpcMethod] = &[
    RpcMethod {
        name: "eth_sendTransaction",
        icon: egui_phosphor::regular::PAPER_PLANE_TILT,
        signs: false,
    },
    RpcMethod {
        name: "personal_sign",
        icon: egui_phosphor::regular::SIGNATURE,
        signs: true,
    },
    RpcMethod {
        name: "eth_signTypedData",
        icon: egui_phosphor::regular::FILE_TEXT,
        signs: true,
    },
    RpcMethod {
        name: "eth_getBalance",
        icon: egui_phosphor::regular::COINS,
        signs: false,
    },
    RpcMethod {
        name: "eth_getTransactionCount",
        icon: egui_phosphor::regular::HASH,
        signs: false,
    },
];

pub fn method_by_name(name: &str) -> Option<&'static RpcMethod> {
    DEMO_METHODS.iter().find(|m| m.name == name)
}

/// Display-text conversion for a JSON value. Strings render bare, `null` has
/// no textual form, everything else renders as its JSON serialization.
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Build the displayable response record for a completed call.
///
/// Field order matches what the wallet shows: method, signer address, the
/// validity flag for signing methods, then the raw result.
pub fn format_response(method: &str, address: &str, valid: Option<bool>, result: &Value) -> RpcResponse {
    let mut fields = vec![
        ResponseField::new("method", Some(method.to_string())),
        ResponseField::new("address", Some(address.to_string())),
    ];
    if let Some(valid) = valid {
        fields.push(ResponseField::new("valid", display_text(&Value::Bool(valid))));
    }
    fields.push(ResponseField::new("result", display_text(result)));
    RpcResponse { fields }
}

/// The error the wallet reports when the user declines a request.
pub fn rejection(method: &str) -> RpcError {
    RpcError {
        method: method.to_string(),
        error: "User rejected.".to_string(),
    }
}

/// Canned result payload per demo method, used by the simulated driver.
pub fn sample_result(method: &str) -> Value {
    match method {
        "eth_sendTransaction" => Value::String(
            "0x7d3f9c4b41a2ee0d9ff8a6c31b76c58eb3ad19c17e90f0e6c2a4d85bb1f07a23".into(),
        ),
        "personal_sign" | "eth_signTypedData" => Value::String(
            "0x1b9f3a6e2c84d7f05e6b4a9c83d12f70a45c6ee8b90d31724f8c5a6d0e9b21c7\
             44aa0f3d6b85c1e29f70d4a6b8c53e12d90f7a45c6ee8b90d31724f8c5a6d01c"
                .into(),
        ),
        "eth_getBalance" => Value::String("0.4277 ETH".into()),
        "eth_getTransactionCount" => Value::Number(42.into()),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_text_handles_each_shape() {
        assert_eq!(display_text(&json!("abc")), Some("abc".into()));
        assert_eq!(display_text(&json!(42)), Some("42".into()));
        assert_eq!(display_text(&json!(true)), Some("true".into()));
        assert_eq!(display_text(&Value::Null), None);
        assert_eq!(display_text(&json!({"a": 1})), Some("{\"a\":1}".into()));
    }

    #[test]
    fn format_response_field_order() {
        let resp = format_response("personal_sign", "0xabc", Some(true), &json!("0xsig"));
        let names: Vec<&str> = resp.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["method", "address", "valid", "result"]);
        assert_eq!(
            resp.display_lines(),
            vec![
                "method: personal_sign",
                "address: 0xabc",
                "valid: true",
                "result: 0xsig",
            ]
        );
    }

    #[test]
    fn validity_omitted_for_non_signing_calls() {
        let resp = format_response("eth_getBalance", "0xabc", None, &json!("0.4 ETH"));
        assert!(resp.fields.iter().all(|f| f.name != "valid"));
        assert_eq!(resp.fields.len(), 3);
    }

    #[test]
    fn null_result_renders_empty_value() {
        let resp = format_response("eth_call", "0xabc", None, &Value::Null);
        assert_eq!(resp.display_lines().last().unwrap(), "result: ");
    }

    #[test]
    fn rejection_carries_method_and_message() {
        let err = rejection("eth_sendTransaction");
        assert_eq!(
            err.display_lines(),
            vec!["Method: eth_sendTransaction", "Error: User rejected."]
        );
    }

    #[test]
    fn every_demo_method_has_a_sample_result() {
        for method in DEMO_METHODS {
            assert!(
                !sample_result(method.name).is_null(),
                "no sample result for {}",
                method.name
            );
        }
    }

    #[test]
    fn method_lookup() {
        assert!(method_by_name("personal_sign").is_some());
        assert!(method_by_name("eth_unknown").is_none());
    }
}
