// ui/mod.rs - UI module definitions

pub mod renderer;
pub mod screen;
pub mod theme;
pub mod widgets;

// Re-export commonly used types
pub use renderer::TerminalDisplay;
pub use screen::Screen;
pub use theme::Theme;
