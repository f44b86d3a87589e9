// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Storage key under which the selected theme mode is persisted.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "design-system-theme";

/// How often the OS color-scheme preference is re-read while watched (in milliseconds).
pub const SYSTEM_THEME_POLL_INTERVAL_MS: u64 = 2_000;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay for a toast (in milliseconds). Zero disables auto-dismiss.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Length of the exit animation between dismissal and removal (in milliseconds).
pub const TOAST_LEAVE_DURATION_MS: u64 = 300;

/// Length of the entry fade (in milliseconds).
pub const TOAST_ENTER_DURATION_MS: u64 = 200;

/// Upper bound accepted for a configured default duration (one hour).
pub const MAX_TOAST_DURATION_MS: u64 = 3_600_000;

/// Interval of the host tick that drives toast timers (in milliseconds).
pub const TOAST_TICK_INTERVAL_MS: u64 = 50;
