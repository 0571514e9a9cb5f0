//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, asset stores,
//! and configuration.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `fontstore` – loaded GUI fonts keyed by name (non-send)
//! - `gameconfig` – INI-backed window, GUI and asset settings
//! - `input` – keys and mouse buttons currently held, last mouse position
//! - `screensize` – current framebuffer dimensions in pixels
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod fontstore;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod texturestore;
pub mod worldtime;
