// SPDX-License-Identifier: MPL-2.0
//! `iced_swatch` is a design-system component library built with the Iced GUI framework.
//!
//! It provides typography, form inputs, alerts, a toast delivery system and
//! light/dark/system theming, plus a demo application composing them on a
//! single page.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
