//! Recording stand-ins for the SDL window, shared by the unit tests.

use crate::config::FullscreenMode;
use crate::error::WindowError;
use crate::window::{NativeWindow, WindowFactory};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Title(String),
    Show,
    Hide,
    Raise,
    Fullscreen(Option<FullscreenMode>),
    DrawColor([u8; 4]),
    Clear,
    Present,
    Dropped,
}

type Log = Rc<RefCell<Vec<(u32, Call)>>>;

pub struct FakeWindow {
    id: u32,
    fail_fullscreen: Rc<Cell<bool>>,
    log: Log,
}

impl FakeWindow {
    fn record(&self, call: Call) {
        self.log.borrow_mut().push((self.id, call));
    }
}

impl NativeWindow for FakeWindow {
    fn id(&self) -> u32 {
        self.id
    }
    fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        self.record(Call::Title(title.to_string()));
        Ok(())
    }
    fn show(&mut self) {
        self.record(Call::Show);
    }
    fn hide(&mut self) {
        self.record(Call::Hide);
    }
    fn raise(&mut self) {
        self.record(Call::Raise);
    }
    fn set_fullscreen(&mut self, mode: Option<FullscreenMode>) -> Result<(), String> {
        if self.fail_fullscreen.get() {
            return Err("no display".to_string());
        }
        self.record(Call::Fullscreen(mode));
        Ok(())
    }
    fn set_draw_color(&mut self, rgba: [u8; 4]) {
        self.record(Call::DrawColor(rgba));
    }
    fn clear(&mut self) {
        self.record(Call::Clear);
    }
    fn present(&mut self) {
        self.record(Call::Present);
    }
}

impl Drop for FakeWindow {
    fn drop(&mut self) {
        self.record(Call::Dropped);
    }
}

/// Hands out windows with consecutive ids, starting at the one given to `new`.
pub struct FakeFactory {
    next_id: Cell<u32>,
    pub fail_create: bool,
    fail_fullscreen: Rc<Cell<bool>>,
    log: Log,
}

impl FakeFactory {
    pub fn new(first_id: u32) -> Self {
        FakeFactory {
            next_id: Cell::new(first_id),
            fail_create: false,
            fail_fullscreen: Rc::new(Cell::new(false)),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Makes `set_fullscreen` fail on every window, including already created ones.
    pub fn fail_fullscreen(&self, fail: bool) {
        self.fail_fullscreen.set(fail);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn calls_for(&self, id: u32) -> Vec<Call> {
        self.log
            .borrow()
            .iter()
            .filter(|(i, _)| *i == id)
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub fn reset(&self) {
        self.log.borrow_mut().clear();
    }
}

impl WindowFactory for FakeFactory {
    type Window = FakeWindow;

    fn create(&self, _title: &str, _w: u32, _h: u32) -> Result<FakeWindow, WindowError> {
        if self.fail_create {
            return Err(WindowError::RendererBuild("no renderer".to_string()));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Ok(FakeWindow {
            id,
            fail_fullscreen: self.fail_fullscreen.clone(),
            log: self.log.clone(),
        })
    }
}
