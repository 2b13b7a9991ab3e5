//! Schema of a tiling window manager configuration.
//!
//! Everything in here is plain data handed to a window manager runtime. The runtime owns layout,
//! input routing and bar rendering; this crate only describes what it should do.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod command;
pub mod config;
mod descriptor;
pub mod errors;
pub mod models;
pub mod utils;

pub use command::{Command, MouseCommand};
pub use config::Config;
pub use descriptor::Descriptor;
pub use models::Keybind;
pub use utils::child_process;
