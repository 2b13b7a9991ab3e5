// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod command;
mod config;
pub mod logging;
pub mod utils;

pub use command::*;
pub use config::*;
