//! Common types and data structures

use chrono::{DateTime, Local};

/// Lifecycle of a JSON-RPC request, as shown in the status dialog.
///
/// Constructed by the owner of the request; the dialog only renders it.
/// Exactly one variant is live at a time, so the pending / response / error
/// blocks can never appear together.
#[derive(Clone, PartialEq)]
pub enum RequestStatus {
    Idle,
    Pending,
    Succeeded(RpcResponse),
    Failed(RpcError),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RequestStatus::Succeeded(_) | RequestStatus::Failed(_))
    }
}

/// One named field of a formatted response. `value` is already display text;
/// `None` means the upstream value had no textual form and renders empty.
#[derive(Clone, PartialEq)]
pub struct ResponseField {
    pub name: String,
    pub value: Option<String>,
}

impl ResponseField {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Successful result of a JSON-RPC call, formatted for display.
/// Field order is display order.
#[derive(Clone, PartialEq, Default)]
pub struct RpcResponse {
    pub fields: Vec<ResponseField>,
}

impl RpcResponse {
    /// One `"<name>: <value>"` line per field, in field order.
    pub fn display_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{}: {}", f.name, f.value.as_deref().unwrap_or_default()))
            .collect()
    }
}

/// Failure payload of a JSON-RPC call: the method that failed and a
/// human-readable description.
#[derive(Clone, PartialEq)]
pub struct RpcError {
    pub method: String,
    pub error: String,
}

impl RpcError {
    /// The two lines the failure block shows.
    pub fn display_lines(&self) -> Vec<String> {
        vec![
            format!("Method: {}", self.method),
            format!("Error: {}", self.error),
        ]
    }
}

/// A finished request, kept for the history panel.
pub struct RequestRecord {
    pub method: String,
    pub finished_at: DateTime<Local>,
    pub outcome: Result<RpcResponse, RpcError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> RpcResponse {
        RpcResponse {
            fields: vec![
                ResponseField::new("balance", Some("42".into())),
                ResponseField::new("symbol", Some("ETH".into())),
            ],
        }
    }

    #[test]
    fn response_lines_follow_field_order() {
        let lines = sample_response().display_lines();
        assert_eq!(lines, vec!["balance: 42", "symbol: ETH"]);
    }

    #[test]
    fn missing_value_renders_empty() {
        let resp = RpcResponse {
            fields: vec![ResponseField::new("result", None)],
        };
        assert_eq!(resp.display_lines(), vec!["result: "]);
    }

    #[test]
    fn empty_response_has_no_lines() {
        assert!(RpcResponse::default().display_lines().is_empty());
    }

    #[test]
    fn error_lines_are_method_then_error() {
        let err = RpcError {
            method: "eth_sendTransaction".into(),
            error: "User rejected.".into(),
        };
        assert_eq!(
            err.display_lines(),
            vec!["Method: eth_sendTransaction", "Error: User rejected."]
        );
    }

    #[test]
    fn status_predicates() {
        assert!(RequestStatus::Pending.is_pending());
        assert!(!RequestStatus::Idle.is_pending());
        assert!(RequestStatus::Succeeded(sample_response()).is_resolved());
        assert!(RequestStatus::Failed(RpcError {
            method: "personal_sign".into(),
            error: "timeout".into(),
        })
        .is_resolved());
        assert!(!RequestStatus::Pending.is_resolved());
    }

    #[test]
    fn identical_status_values_compare_equal() {
        // Rendering is a pure function of the status, so equal inputs mean
        // an identical visual tree.
        let a = RequestStatus::Succeeded(sample_response());
        let b = RequestStatus::Succeeded(sample_response());
        assert!(a == b);
    }
}
