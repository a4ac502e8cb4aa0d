use crate::config::FullscreenMode;
use crate::error::WindowError;
use crate::events::IoEvents;
use crate::window::{AppWindow, NativeWindow, WindowFactory};
use log::{info, warn};
use sdl2::pixels::Color;
use sdl2::render::WindowCanvas;
use sdl2::video::FullscreenType;

pub type SdlWindow = AppWindow<WindowCanvas>;

pub struct System {
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
    pub events: Vec<IoEvents>,
}

impl System {
    pub fn new() -> Result<System, WindowError> {
        let sdl_context = sdl2::init().map_err(WindowError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(WindowError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(WindowError::Sdl)?;

        info!(
            "SDL {} initialized, video driver: {}",
            sdl2::version::version(),
            video_subsystem.current_video_driver()
        );

        Ok(System {
            sdl_context,
            video_subsystem,
            event_pump,
            events: Vec::new(),
        })
    }

    /// Drains pending SDL events and returns the ones the windows care about.
    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();
        for event in self.event_pump.poll_iter() {
            if let Some(e) = IoEvents::from_sdl(&event) {
                self.events.push(e);
            }
        }
        &self.events
    }
}

impl WindowFactory for System {
    type Window = WindowCanvas;

    fn create(&self, title: &str, width: u32, height: u32) -> Result<WindowCanvas, WindowError> {
        let window = match self
            .video_subsystem
            .window(title, width, height)
            .resizable()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(WindowError::WindowBuild(e.to_string())),
        };

        // the builder consumes the window, so a failure here also destroys it
        match window.into_canvas().accelerated().present_vsync().build() {
            Ok(canvas) => Ok(canvas),
            Err(e) => Err(renderer_failed(e)),
        }
    }
}

fn renderer_failed(e: impl std::fmt::Display) -> WindowError {
    warn!("renderer creation failed, window destroyed: {e}");
    WindowError::RendererBuild(e.to_string())
}

impl NativeWindow for WindowCanvas {
    fn id(&self) -> u32 {
        self.window().id()
    }

    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        self.window_mut().set_title(title)?;
        Ok(())
    }

    fn show(&mut self) {
        self.window_mut().show();
    }

    fn hide(&mut self) {
        self.window_mut().hide();
    }

    fn raise(&mut self) {
        self.window_mut().raise();
    }

    fn set_fullscreen(&mut self, mode: Option<FullscreenMode>) -> Result<(), String> {
        let fullscreen_type = match mode {
            None => FullscreenType::Off,
            Some(FullscreenMode::Exclusive) => FullscreenType::True,
            Some(FullscreenMode::Desktop) => FullscreenType::Desktop,
        };
        self.window_mut().set_fullscreen(fullscreen_type)
    }

    fn set_draw_color(&mut self, rgba: [u8; 4]) {
        let [r, g, b, a] = rgba;
        WindowCanvas::set_draw_color(self, Color::RGBA(r, g, b, a));
    }

    fn clear(&mut self) {
        WindowCanvas::clear(self);
    }

    fn present(&mut self) {
        WindowCanvas::present(self);
    }
}
