//! Shared color constants for the UI.

use egui::Color32;

/// Active accounts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Load errors, inactive accounts and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Admin role badge.
pub const COLOR_PURPLE: Color32 = Color32::from_rgb(126, 34, 206);

/// Regular role badge and secondary text.
pub const COLOR_GRAY: Color32 = Color32::from_rgb(107, 114, 128);
