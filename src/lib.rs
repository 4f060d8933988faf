//! # wheel-of-choices
//!
//! Leptos + WASM frontend for the spinning-wheel picker. Users build a list
//! of names, generate a numeric range, or start from a fixed color palette,
//! then spin an animated wheel that selects one entry at random and reveals
//! it in a modal.
//!
//! This crate contains pages, components, and form state. It integrates
//! with the `wheel` crate for geometry, selection, and imperative canvas
//! rendering via the `WheelCanvas` bridge component.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
