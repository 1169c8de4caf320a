//! Query-routing agent for the Concierge service.
//!
//! A query flows through three steps: the router classifies it as a
//! document question or a web question, exactly one responder generates an
//! answer with sources, and the orchestrator collects the result into a
//! flat record. The flow is a single pass — no responder re-enters the
//! router, no step runs twice.

pub mod agent;
pub mod prompts;
pub mod responders;
pub mod router;
pub mod state;

// Re-export commonly used types
pub use agent::Agent;
pub use state::{AgentOutcome, Decision};
