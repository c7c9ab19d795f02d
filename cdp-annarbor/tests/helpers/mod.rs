//! Shared helpers for cdp-annarbor integration tests
#![allow(dead_code)]

pub mod fixtures;
pub mod log_capture;
pub mod stub_cablecast;
