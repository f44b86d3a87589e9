// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod checkbox;
pub mod container;
pub mod text_input;
