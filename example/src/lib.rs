//! Companions generated from `build.rs` and pulled in with `include!`.

pub mod calendar;
