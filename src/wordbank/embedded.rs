//! Embedded word bank
//!
//! Default three-tier bank compiled into the binary at build time.

// Include generated bank from build script
include!(concat!(env!("OUT_DIR"), "/bank.rs"));
