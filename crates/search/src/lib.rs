//! Web-search integration crate for the Concierge service.
//!
//! Provides a provider-agnostic abstraction over external search APIs.
//! The only shipped provider is Tavily; the trait seam exists so the agent
//! and its tests can swap in scripted clients.

pub mod client;
pub mod providers;

// Re-export main types
pub use client::{SearchClient, SearchResult};
pub use providers::TavilyClient;
