//! Core library for `estima`.
//!
//! Two independent calculators live here: [`pau`] turns a set of exam grades
//! into admission scores, [`cloud`] prices a month of cloud storage usage.
//! Both are pure functions over small input records; the binary only collects
//! input and renders output.

pub mod cloud;
pub mod output;
pub mod pau;
