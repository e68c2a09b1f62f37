//! UI layer: app shell, page host, section renderers, and theme.

pub mod app;
pub mod host;
pub mod sections;
pub mod theme;

pub use app::LandingApp;
