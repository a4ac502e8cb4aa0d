use crate::config::{DemoConfig, FullscreenMode};
use crate::error::WindowError;
use crate::events::{IoEvents, Key, WindowEventKind};
use log::debug;

/// A native window together with the renderer drawing into it.
///
/// Both live and die together, so a renderer can never outlive its window.
pub trait NativeWindow {
    fn id(&self) -> u32;
    fn set_title(&mut self, title: &str) -> Result<(), WindowError>;
    fn show(&mut self);
    fn hide(&mut self);
    fn raise(&mut self);
    /// `None` switches back to windowed mode.
    fn set_fullscreen(&mut self, mode: Option<FullscreenMode>) -> Result<(), String>;
    fn set_draw_color(&mut self, rgba: [u8; 4]);
    fn clear(&mut self);
    fn present(&mut self);
}

pub trait WindowFactory {
    type Window: NativeWindow;

    /// Creates a window and its renderer. When the renderer can't be created
    /// the window must already be destroyed on return.
    fn create(&self, title: &str, width: u32, height: u32) -> Result<Self::Window, WindowError>;
}

/// Window wrapper keeping track of focus, visibility and fullscreen state.
pub struct AppWindow<N: NativeWindow> {
    native: Option<N>,
    window_id: u32,

    title: String,
    clear_color: [u8; 4],
    fullscreen_mode: FullscreenMode,

    width: i32,
    height: i32,

    mouse_focus: bool,
    keyboard_focus: bool,
    fullscreen: bool,
    minimized: bool,
    shown: bool,
}

impl<N: NativeWindow> Default for AppWindow<N> {
    fn default() -> Self {
        let config = DemoConfig::default();
        AppWindow {
            native: None,
            window_id: 0,
            title: config.title,
            clear_color: config.clear_color,
            fullscreen_mode: config.fullscreen,
            width: 0,
            height: 0,
            mouse_focus: false,
            keyboard_focus: false,
            fullscreen: false,
            minimized: false,
            shown: false,
        }
    }
}

impl<N: NativeWindow> AppWindow<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init<F>(&mut self, factory: &F, config: &DemoConfig) -> Result<(), WindowError>
    where
        F: WindowFactory<Window = N>,
    {
        if self.native.is_some() {
            self.free();
        }

        let mut native = factory.create(&config.title, config.width, config.height)?;
        native.set_draw_color(config.clear_color);

        self.window_id = native.id();
        self.native = Some(native);
        self.title = config.title.clone();
        self.clear_color = config.clear_color;
        self.fullscreen_mode = config.fullscreen;
        self.width = config.width as i32;
        self.height = config.height as i32;
        self.mouse_focus = true;
        self.keyboard_focus = true;
        self.fullscreen = false;
        self.minimized = false;
        self.shown = true;

        debug!(
            "window {} created ({}x{})",
            self.window_id, self.width, self.height
        );
        Ok(())
    }

    pub fn handle_event(&mut self, event: &IoEvents) -> Result<(), WindowError> {
        let Some(native) = self.native.as_mut() else {
            return Ok(());
        };

        match *event {
            IoEvents::Window { window_id, event } if window_id == self.window_id => {
                let mut update_caption = false;
                match event {
                    WindowEventKind::Shown => self.shown = true,
                    WindowEventKind::Hidden => self.shown = false,
                    WindowEventKind::SizeChanged(w, h) => {
                        self.width = w;
                        self.height = h;
                        native.present();
                    }
                    WindowEventKind::Exposed => native.present(),
                    WindowEventKind::Enter => {
                        self.mouse_focus = true;
                        update_caption = true;
                    }
                    WindowEventKind::Leave => {
                        self.mouse_focus = false;
                        update_caption = true;
                    }
                    WindowEventKind::FocusGained => {
                        self.keyboard_focus = true;
                        update_caption = true;
                    }
                    WindowEventKind::FocusLost => {
                        self.keyboard_focus = false;
                        update_caption = true;
                    }
                    WindowEventKind::Minimized => self.minimized = true,
                    WindowEventKind::Maximized | WindowEventKind::Restored => {
                        self.minimized = false
                    }
                    WindowEventKind::Close => native.hide(),
                    WindowEventKind::Other => {}
                }

                if update_caption {
                    let caption = self.caption();
                    if let Some(native) = self.native.as_mut() {
                        native.set_title(&caption)?;
                    }
                }
            }
            // Return toggles fullscreen on every window, not only the focused one
            IoEvents::KeyDown {
                key: Key::Return, ..
            } => self.toggle_fullscreen()?,
            _ => {}
        }
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self) -> Result<(), WindowError> {
        let Some(native) = self.native.as_mut() else {
            return Ok(());
        };

        if self.fullscreen {
            native
                .set_fullscreen(None)
                .map_err(|reason| WindowError::Fullscreen {
                    action: "leave",
                    reason,
                })?;
            self.fullscreen = false;
        } else {
            native
                .set_fullscreen(Some(self.fullscreen_mode))
                .map_err(|reason| WindowError::Fullscreen {
                    action: "enter",
                    reason,
                })?;
            self.fullscreen = true;
            self.minimized = false;
        }
        debug!("window {} fullscreen={}", self.window_id, self.fullscreen);
        Ok(())
    }

    pub fn caption(&self) -> String {
        let on_off = |flag: bool| if flag { "On" } else { "Off" };
        format!(
            "{} - ID: {} MouseFocus:{} KeyboardFocus:{}",
            self.title,
            self.window_id,
            on_off(self.mouse_focus),
            on_off(self.keyboard_focus)
        )
    }

    pub fn focus(&mut self) {
        if let Some(native) = self.native.as_mut() {
            if !self.shown {
                native.show();
            }
            native.raise();
        }
    }

    pub fn render(&mut self) {
        if self.minimized {
            return;
        }
        if let Some(native) = self.native.as_mut() {
            native.set_draw_color(self.clear_color);
            native.clear();
            native.present();
        }
    }

    pub fn id(&self) -> u32 {
        self.window_id
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn has_mouse_focus(&self) -> bool {
        self.mouse_focus
    }

    pub fn has_keyboard_focus(&self) -> bool {
        self.keyboard_focus
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_initialized(&self) -> bool {
        self.native.is_some()
    }

    /// Destroys renderer and window and resets all state. Safe to call twice.
    pub fn free(&mut self) {
        if self.native.take().is_some() {
            debug!("window {} destroyed", self.window_id);
        }
        self.window_id = 0;
        self.width = 0;
        self.height = 0;
        self.mouse_focus = false;
        self.keyboard_focus = false;
        self.fullscreen = false;
        self.minimized = false;
        self.shown = false;
    }
}
