//! Tool-call status indicator for agent chat transcripts.
//!
//! Renders the live status of an AI agent's tool invocations as a one-line
//! ratatui affordance: a spinner while the call is in flight, a static
//! success dot once a result arrived, plus a short present-participle
//! phrase ("Creating App.jsx").
//!
//! The crate owns no state. The caller tracks one [`ToolInvocation`] per
//! tool call issued by the agent and passes it in on every render pass;
//! everything here is a pure function of that record.

mod indicator;
mod invocation;
pub mod prompts;
mod status;

pub use indicator::{IndicatorTheme, ToolCallIndicator, indicator_line, indicator_plain};
pub use invocation::{IndicatorPhase, ToolArgs, ToolInvocation};
pub use status::{
    EditorCommand, FileManagerCommand, ToolAction, extract_file_name, format_status,
};
