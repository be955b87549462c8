//! Colors - GridView Theme Colors

use gpui::{rgb, Rgba};

/// GridView color palette - All colors are accessed via associated functions
pub struct GridColors;

impl GridColors {
    // Primary colors
    /// Demo app header background - Indigo
    pub fn header_bg() -> Rgba { rgb(0x4f46e5) }
    /// Accent - Blue (active controls, checked boxes)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0x6b7280) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate (striping)
    pub fn table_row_alt() -> Rgba { rgb(0xf9fafb) }
    /// Skeleton placeholder bar
    pub fn skeleton() -> Rgba { rgb(0xe5e7eb) }

    // Input colors
    /// Input/checkbox background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input/checkbox border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
}
