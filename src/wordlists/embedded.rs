//! Embedded word list
//!
//! Generated by `build.rs` from `data/answers.txt`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
