//! Tool domain value objects — errors and the amount union
//!
//! [`ToolError`] is the single error type a capability provider may raise.
//! Variants are distinguishable by kind so the dispatcher can relay them
//! without losing cause information: capability and configuration problems
//! are detected before any network call, upstream failures preserve the
//! underlying message verbatim.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error raised by a capability provider or the dispatch wrapper.
#[derive(Debug, Clone, Error)]
pub enum ToolError {
    /// Requested chain is outside the provider's supported set.
    /// Detected before any network call.
    #[error("{operation}: chain '{chain}' is not supported (supported: {supported})")]
    UnsupportedChain {
        operation: String,
        chain: String,
        supported: String,
    },

    /// Requested asset/resource is not available on the target chain.
    #[error("{operation}: asset '{asset}' is not supported")]
    UnsupportedAsset { operation: String, asset: String },

    /// Wallet balance cannot cover the requested operation.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(String),

    /// The bound wallet cannot sign; raised if a private operation is ever
    /// reached with a read-only wallet (the registry gate should prevent it).
    #[error("{0} requires a signing-capable wallet")]
    SigningRequired(String),

    /// Network/API/contract failure during execution. The upstream message
    /// is preserved for diagnosability.
    #[error("{operation} failed upstream: {message}")]
    Upstream { operation: String, message: String },

    /// Call was cancelled before the provider finished.
    #[error("{0} was cancelled")]
    Cancelled(String),
}

impl ToolError {
    pub fn unsupported_chain(
        operation: impl Into<String>,
        chain: impl std::fmt::Display,
        supported: impl IntoIterator<Item = impl std::fmt::Display>,
    ) -> Self {
        let supported = supported
            .into_iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnsupportedChain {
            operation: operation.into(),
            chain: chain.to_string(),
            supported,
        }
    }

    pub fn unsupported_asset(operation: impl Into<String>, asset: impl Into<String>) -> Self {
        Self::UnsupportedAsset {
            operation: operation.into(),
            asset: asset.into(),
        }
    }

    pub fn upstream(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Numeric amount or the `"auto"` sentinel.
///
/// Liquidity-provision fields accept either an exact number or `"auto"`,
/// meaning the provider infers the value from the other side of the pair.
/// Modeled as a tagged union instead of string coercion; the registry and
/// dispatcher pass it through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Exact(f64),
    Auto,
}

impl Amount {
    /// Parse from raw JSON: a number, a numeric string, or `"auto"`.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Amount::Exact)
                .ok_or_else(|| format!("'{n}' is not a representable number")),
            serde_json::Value::String(s) if s.eq_ignore_ascii_case("auto") => Ok(Amount::Auto),
            serde_json::Value::String(s) => s
                .parse::<f64>()
                .map(Amount::Exact)
                .map_err(|_| format!("'{s}' is neither a number nor \"auto\"")),
            other => Err(format!("expected a number or \"auto\", got {other}")),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Amount::Auto)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Exact(n) => write!(f, "{n}"),
            Amount::Auto => write!(f, "auto"),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Exact(n) => serializer.serialize_f64(*n),
            Amount::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Amount::from_value(&value).map_err(D::Error::custom)
    }
}
