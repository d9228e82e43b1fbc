//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the config, the renderer and the per-frame context.

mod core;
mod event_handler;
mod frame;
mod init;
mod orbit;

pub use core::OrreryApp;
