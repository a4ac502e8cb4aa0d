//! The multi-window demo: a set of windows fed from one event stream.

use crate::config::DemoConfig;
use crate::error::WindowError;
use crate::events::{IoEvents, Key};
use crate::window::{AppWindow, NativeWindow, WindowFactory};
use log::{error, info};

/// Maps a digit key to the index of the window it brings forward.
/// Windows are numbered from 1, so 0 and digits past the last window map to nothing.
pub fn focus_target(key: Key, window_count: usize) -> Option<usize> {
    match key {
        Key::Digit(n) if (1..=window_count).contains(&(n as usize)) => Some(n as usize - 1),
        _ => None,
    }
}

pub fn all_hidden<N: NativeWindow>(windows: &[AppWindow<N>]) -> bool {
    windows.iter().all(|w| !w.is_shown())
}

pub struct Demo<N: NativeWindow> {
    windows: Vec<AppWindow<N>>,
}

impl<N: NativeWindow> Demo<N> {
    pub fn open<F>(factory: &F, config: &DemoConfig) -> Result<Demo<N>, WindowError>
    where
        F: WindowFactory<Window = N>,
    {
        let mut windows = Vec::with_capacity(config.window_count);
        for _ in 0..config.window_count {
            let mut window = AppWindow::new();
            window.init(factory, config)?;
            windows.push(window);
        }
        info!("{} windows open", windows.len());
        Ok(Demo { windows })
    }

    pub fn windows(&self) -> &[AppWindow<N>] {
        &self.windows
    }

    /// Feeds one event to every window. Returns false once the demo should stop.
    pub fn handle_event(&mut self, event: &IoEvents) -> bool {
        match *event {
            IoEvents::Quit
            | IoEvents::KeyDown {
                key: Key::Escape, ..
            } => return false,
            _ => {}
        }

        for window in self.windows.iter_mut() {
            // one window failing to change mode must not take the others down
            if let Err(e) = window.handle_event(event) {
                error!("window {}: {e}", window.id());
            }
        }

        if let IoEvents::KeyDown { key, .. } = *event {
            if let Some(i) = focus_target(key, self.windows.len()) {
                self.windows[i].focus();
            }
        }
        true
    }

    pub fn render(&mut self) {
        for window in self.windows.iter_mut() {
            window.render();
        }
    }

    pub fn all_hidden(&self) -> bool {
        all_hidden(&self.windows)
    }

    pub fn free(&mut self) {
        for window in self.windows.iter_mut() {
            window.free();
        }
    }
}
