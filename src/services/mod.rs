//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `mapper.rs` — v2→legacy order translation, error normalization,
//!   deprecation classification (pure).
//! - `fetch.rs` — case resolution against the embedded table or a live
//!   endpoint.
//! - `checks.rs` — the named legacy-expectation checks for both modes.
//! - `gate.rs` — gate report assembly and exit-code policy.
//! - `config.rs` — config file loading and base-url/mode resolution.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod checks;
pub mod config;
pub mod fetch;
pub mod gate;
pub mod mapper;
pub mod output;
