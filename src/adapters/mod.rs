//! Adapters implementing the port traits.
//!
//! - `live`: runs the real `git` CLI.
//! - `recording`: wraps another adapter and writes each call to a cassette.
//! - `replaying`: answers from a cassette without running anything.

pub mod live;
pub mod recording;
pub mod replaying;
