//! Integration test modules.

mod session_flow_test;
mod settings_roundtrip_test;
