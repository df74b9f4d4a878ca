//! Integration tests for fieldcheck.
//!
//! Exercises the public API only: registries built in code and from JSON,
//! validated against flat maps, structs and `serde_json::Value`.

mod config_loading;
mod flat;
mod structured;
