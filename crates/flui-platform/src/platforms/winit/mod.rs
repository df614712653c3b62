//! Winit-based platform implementation

mod clipboard;
mod display;
mod platform;
mod window_requests;

pub use clipboard::ArboardClipboard;
pub use display::WinitDisplay;
pub use platform::WinitPlatform;
