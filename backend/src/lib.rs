pub mod config;
pub mod demo;
pub mod error;
pub mod events;
pub mod system;
pub mod window;

#[cfg(test)]
mod fake;

pub use config::{DemoConfig, FullscreenMode};
pub use demo::Demo;
pub use error::{ConfigError, WindowError};
pub use events::{IoEvents, Key, WindowEventKind};
pub use system::{SdlWindow, System};
pub use window::{AppWindow, NativeWindow, WindowFactory};
