//! # powerstrip-domain
//!
//! Pure domain model for the powerstrip panel.
//!
//! ## Responsibilities
//! - Typed outlet identifier parsed from the page markup ([`outlet::OutletIndex`])
//! - Per-outlet display state and its labels ([`outlet::OutletDisplay`])
//! - Wire types exchanged with `/api/powerstrip/{index}` ([`command`], [`reading`])
//! - Error conventions shared by every layer ([`error`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod outlet;
pub mod reading;
