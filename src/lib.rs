//! Software-rasterized circle demo: draw a disc into a `u32` frame, show it in
//! a minifb window, move it with the arrow keys and resize it with E / Q.

pub mod app;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod logging;
pub mod types;
