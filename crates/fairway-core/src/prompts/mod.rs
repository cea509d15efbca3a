//! Default prompt templates for the analysis services.
//!
//! Every user template carries a `{text}` substitution point consumed by the
//! structured-output client. `CoreConfig` uses these as defaults; a deployment
//! can override any of them from `config/gateway.toml` without code edits.

pub mod coach;
pub mod routing;
pub mod sentiment;
pub mod skill_lie;
