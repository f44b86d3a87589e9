// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`typography`] - Type scale primitives (display, headings, body, code)
//! - [`inputs`] - Text field and checkbox
//! - [`alert`] - Inline severity banner
//! - [`notifications`] - Toast notification system for user feedback
//! - [`theme_switcher`] - Light/Dark/System segmented selector
//!
//! # Shared Infrastructure
//!
//! - [`class_names`] - Conditional class-list resolution
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers, fields)
//! - [`icons`] - SVG icon loading and rendering
//! - [`theming`] - Light/Dark/System theme mode management

pub mod alert;
pub mod class_names;
pub mod design_tokens;
pub mod icons;
pub mod inputs;
pub mod notifications;
pub mod styles;
pub mod theme_switcher;
pub mod theming;
pub mod typography;
