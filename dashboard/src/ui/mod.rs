//! Presentation: theme preference and the text dashboard.

pub mod render;
pub mod theme;

pub use render::render_dashboard;
pub use theme::Theme;
