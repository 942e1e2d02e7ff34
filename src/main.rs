//! Zellij plugin entry point.
//!
//! The plugin only exists on the `wasm32-wasip1` target. Native builds get a
//! stub `main` so the library and its tests build on any host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
mod plugin;

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(plugin::QuizPlugin);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("emotion-quiz is a Zellij plugin; build it with `cargo build --target wasm32-wasip1`");
}
