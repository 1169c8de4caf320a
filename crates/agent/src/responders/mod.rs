//! Answer-generation strategies.
//!
//! Exactly one responder runs per query, chosen by the router.

pub mod rag;
pub mod web;
