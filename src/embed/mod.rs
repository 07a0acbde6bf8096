//! Embedded static payloads.
//!
//! Everything the tool inserts into the page is fixed content; it lives as
//! files under this module and is compiled in with `include_str!`.

/// Stylesheet snippets inserted by the rewrite passes.
pub mod css {
    /// Priority-menu card styles with the emoji watermark layer. Replaces
    /// the page's existing card block wholesale.
    pub const WATERMARK: &str = include_str!("css/watermark.css");

    /// Office card map button.
    pub const MAP_BTN: &str = include_str!("css/map-btn.css");

    /// Member card LinkedIn button and icon sizing.
    pub const LINKEDIN_BTN: &str = include_str!("css/linkedin-btn.css");
}

/// Inline SVG markup.
pub mod svg {
    /// LinkedIn glyph placed inside the member-card buttons.
    pub const LINKEDIN_ICON: &str = include_str!("svg/linkedin-icon.svg");
}
