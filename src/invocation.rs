//! Tool-invocation record and lifecycle phase derivation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Lifecycle tag a finished invocation carries on the wire.
const RESULT_STATE: &str = "result";

/// One discrete action an agent asked to perform.
///
/// Owned by the caller that tracks the agent's tool-call lifecycle; this
/// crate only reads it. `state` is an open set of tags — only the literal
/// `"result"` is distinguished, every other value counts as in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    pub tool_name: String,
    #[serde(default)]
    pub args: ToolArgs,
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
}

/// Argument bag of a tool invocation.
///
/// Shapes vary per tool, so only the fields the formatter reads are typed.
/// Everything else lands in `extra` and is ignored; missing fields default
/// to `None`. During streaming the bag may be only partially populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_path: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Visual phase of the indicator, computed fresh on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPhase {
    Working,
    Done,
}

impl ToolInvocation {
    /// Parse a record off the streaming transport.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Whether a usable result value arrived.
    ///
    /// Follows the upstream truthiness contract: `null`, `false`, `0` and
    /// `""` do not count as a result.
    pub fn has_result(&self) -> bool {
        self.result.as_ref().is_some_and(is_truthy)
    }

    /// Derive the indicator phase.
    ///
    /// `Done` requires both the `"result"` state tag and a present result
    /// value. A `"result"` tag with an absent result still renders as
    /// `Working`: during streaming the tag can land before the payload.
    pub fn phase(&self) -> IndicatorPhase {
        if self.state == RESULT_STATE && self.has_result() {
            IndicatorPhase::Done
        } else {
            IndicatorPhase::Working
        }
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}
