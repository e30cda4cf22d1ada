//! Data models for the cloud API.
//!
//! This crate holds the wire-facing types only: domain entities, typed
//! resource identifiers, per-operation request payloads, response envelopes
//! and the typed error taxonomy. Everything here is a pure, synchronous
//! transformation over already-received data; no I/O happens in this crate.

pub mod actions;
pub mod enums;
pub mod errors;
pub mod ext_traits;
pub mod firewalls;
pub mod id_type;
pub mod images;
pub mod isos;
mod macros;
pub mod meta;
pub mod networks;
pub mod placement_groups;
pub mod servers;

/// User-defined labels attached to a resource.
pub type Labels = std::collections::HashMap<String, String>;
