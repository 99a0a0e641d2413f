//! Protocol result envelopes
//!
//! The tool protocol returns results as a list of typed content blocks
//! plus an `isError` flag. Application-level failures (validation,
//! provider errors, cancellation) travel inside this envelope; only
//! protocol-level failures (unknown method, unparseable frame) become
//! JSON-RPC errors.

use serde::{Deserialize, Serialize};

use relay_application::CallOutcome;

/// A single typed content block. Only text blocks are produced today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            block_type: "text".to_string(),
            text: text.into(),
        }
    }
}

/// Envelope for a `tools/call` result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResult {
    pub content: Vec<ContentBlock>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl From<CallOutcome> for CallResult {
    fn from(outcome: CallOutcome) -> Self {
        Self {
            content: vec![ContentBlock::text(outcome.text)],
            is_error: outcome.is_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_outcome_keeps_message_in_envelope() {
        let result = CallResult::from(CallOutcome::error("RPC node returned 503"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "RPC node returned 503");
    }

    #[test]
    fn test_success_outcome() {
        let result = CallResult::from(CallOutcome::success("done"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isError"], false);
        assert_eq!(json["content"][0]["text"], "done");
    }
}
