use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("could not create window: {0}")]
    WindowBuild(String),

    #[error("could not create renderer for window: {0}")]
    RendererBuild(String),

    #[error("could not set window title: {0}")]
    Title(#[from] std::ffi::NulError),

    /// `action` is either "enter" or "leave".
    #[error("could not {action} fullscreen: {reason}")]
    Fullscreen { action: &'static str, reason: String },

    #[error("SDL error: {0}")]
    Sdl(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
