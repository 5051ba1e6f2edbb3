//! Theme configuration for Job Board Viewer.
//!
//! This module provides custom colors and sizing constants for iced widgets.

use iced::Color;

/// Application colors.
pub mod colors {
    use super::Color;

    /// Card/panel background
    pub const CARD: Color = Color::from_rgb(0.14, 0.14, 0.14);

    /// Text secondary
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.53, 0.53, 0.53);

    /// Text muted
    pub const TEXT_MUTED: Color = Color::from_rgb(0.40, 0.40, 0.40);

    /// Border color
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.25);

    /// Error text
    pub const ERROR: Color = Color::from_rgb(0.85, 0.35, 0.35);

    /// Link text
    pub const LINK: Color = Color::from_rgb(0.40, 0.60, 0.95);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Large font size
    pub const LG: f32 = 16.0;
    /// Header font size
    pub const HEADER: f32 = 18.0;
}
