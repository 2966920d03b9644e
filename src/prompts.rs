//! Generation prompt for the code-generation model.
//!
//! Configuration data, not logic: the chat pipeline hands this string to
//! the model verbatim. It has no interface to the indicator.

/// Instruction template for the React component generator.
pub fn generation_prompt() -> &'static str {
    include_str!("prompts/generation.txt")
}
