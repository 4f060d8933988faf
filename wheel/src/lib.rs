//! Wheel engine for the spinning-wheel picker.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! everything below the UI layer: the entry registry, slice geometry, the
//! selection engine with its cumulative rotation state, and canvas rendering.
//! The Leptos host is responsible only for wiring DOM events to
//! [`engine::WheelCore`], feeding it random unit samples, and scheduling the
//! reveal timeout after the spin animation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Aggregate [`engine::WheelCore`] shared by all wheel pages |
//! | [`entries`] | Entry registry and numeric-range generation |
//! | [`geometry`] | Angular slices and the fixed fill palette |
//! | [`spin`] | Selection engine and cumulative rotation state |
//! | [`render`] | Slice rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric constants (spin count, durations, caps) |

pub mod consts;
pub mod engine;
pub mod entries;
pub mod geometry;
pub mod render;
pub mod spin;
