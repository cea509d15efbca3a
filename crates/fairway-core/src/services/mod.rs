//! Analysis services built on the structured-output client.
//!
//! Each service is a pure function of (input, config) aside from the network
//! call. Failures surface to the caller unchanged: no heuristic fallback, no
//! retry. In mock mode every service returns a deterministic result so the
//! whole pipeline runs offline.

mod agent_type;
mod lie;
mod sentiment;

pub use agent_type::AgentTypeService;
pub use lie::LieAnalysisService;
pub use sentiment::SentimentService;

use crate::shared::UserInput;

/// Serializes a `UserInput` into the flat text block the routing and lie
/// prompts consume.
pub fn flatten_user_input(input: &UserInput) -> String {
    let mut block = format!(
        "Input Type: {}\nContent: {}",
        input.input_type, input.content
    );
    if let Some(path) = &input.file_path {
        block.push_str("\nFile Path: ");
        block.push_str(path);
    }
    block
}
