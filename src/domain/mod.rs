//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep wire-shape and report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `OrderLegacy` and `ErrorV1` are consumed by legacy clients; `GateReport`
//! backs the `--json` output and `docs/contracts/*`. Keep schema-impacting
//! changes explicit.

pub mod models;
