//! Shared color constants for the UI.

use egui::Color32;

use keyrace_business::AccuracyTier;

/// Forest green for high accuracy and successful actions.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Error colour: failed loads, low accuracy, destructive buttons.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Medium accuracy.
pub const COLOR_ORANGE: Color32 = Color32::from_rgb(255, 165, 0);

/// Skeleton fill for pending cells.
pub const COLOR_PLACEHOLDER: Color32 = Color32::from_gray(90);

#[inline]
pub fn accuracy_color(tier: AccuracyTier) -> Color32 {
    match tier {
        AccuracyTier::High => COLOR_GREEN,
        AccuracyTier::Medium => COLOR_ORANGE,
        AccuracyTier::Low => COLOR_RED,
    }
}
