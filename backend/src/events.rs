use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Return,
    Escape,
    // 0..=9, from the top row of the keyboard
    Digit(u8),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEventKind {
    Shown,
    Hidden,
    Exposed,
    // width, height
    SizeChanged(i32, i32),
    Minimized,
    Maximized,
    Restored,
    // mouse entered / left the window
    Enter,
    Leave,
    // keyboard focus
    FocusGained,
    FocusLost,
    Close,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    Window {
        window_id: u32,
        event: WindowEventKind,
    },
    KeyDown {
        window_id: u32,
        key: Key,
    },
}

impl IoEvents {
    /// Translates an SDL event, dropping the ones nothing here reacts to.
    pub fn from_sdl(event: &Event) -> Option<IoEvents> {
        match event {
            Event::Quit { .. } => Some(IoEvents::Quit),
            Event::Window {
                window_id,
                win_event,
                ..
            } => Some(IoEvents::Window {
                window_id: *window_id,
                event: translate_window_event(win_event),
            }),
            Event::KeyDown {
                window_id, keycode, ..
            } => Some(IoEvents::KeyDown {
                window_id: *window_id,
                key: keycode.map_or(Key::Other, translate_key),
            }),
            _ => None,
        }
    }
}

fn translate_window_event(event: &WindowEvent) -> WindowEventKind {
    match event {
        WindowEvent::Shown => WindowEventKind::Shown,
        WindowEvent::Hidden => WindowEventKind::Hidden,
        WindowEvent::Exposed => WindowEventKind::Exposed,
        WindowEvent::SizeChanged(w, h) => WindowEventKind::SizeChanged(*w, *h),
        WindowEvent::Minimized => WindowEventKind::Minimized,
        WindowEvent::Maximized => WindowEventKind::Maximized,
        WindowEvent::Restored => WindowEventKind::Restored,
        WindowEvent::Enter => WindowEventKind::Enter,
        WindowEvent::Leave => WindowEventKind::Leave,
        WindowEvent::FocusGained => WindowEventKind::FocusGained,
        WindowEvent::FocusLost => WindowEventKind::FocusLost,
        WindowEvent::Close => WindowEventKind::Close,
        _ => WindowEventKind::Other,
    }
}

pub fn translate_key(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Return => Key::Return,
        Keycode::Escape => Key::Escape,
        Keycode::Num0 => Key::Digit(0),
        Keycode::Num1 => Key::Digit(1),
        Keycode::Num2 => Key::Digit(2),
        Keycode::Num3 => Key::Digit(3),
        Keycode::Num4 => Key::Digit(4),
        Keycode::Num5 => Key::Digit(5),
        Keycode::Num6 => Key::Digit(6),
        Keycode::Num7 => Key::Digit(7),
        Keycode::Num8 => Key::Digit(8),
        Keycode::Num9 => Key::Digit(9),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_event(window_id: u32, win_event: WindowEvent) -> Event {
        Event::Window {
            timestamp: 0,
            window_id,
            win_event,
        }
    }

    #[test]
    fn test_quit() {
        let event = Event::Quit { timestamp: 7 };
        assert_eq!(IoEvents::from_sdl(&event), Some(IoEvents::Quit));
    }

    #[test]
    fn test_size_changed_keeps_dimensions() {
        let event = window_event(2, WindowEvent::SizeChanged(800, 600));
        assert_eq!(
            IoEvents::from_sdl(&event),
            Some(IoEvents::Window {
                window_id: 2,
                event: WindowEventKind::SizeChanged(800, 600)
            })
        );
    }

    #[test]
    fn test_focus_events() {
        for (sdl, ours) in [
            (WindowEvent::Enter, WindowEventKind::Enter),
            (WindowEvent::Leave, WindowEventKind::Leave),
            (WindowEvent::FocusGained, WindowEventKind::FocusGained),
            (WindowEvent::FocusLost, WindowEventKind::FocusLost),
        ] {
            assert_eq!(
                IoEvents::from_sdl(&window_event(1, sdl)),
                Some(IoEvents::Window {
                    window_id: 1,
                    event: ours
                })
            );
        }
    }

    #[test]
    fn test_unhandled_window_event_becomes_other() {
        let event = window_event(1, WindowEvent::Moved(10, 20));
        assert_eq!(
            IoEvents::from_sdl(&event),
            Some(IoEvents::Window {
                window_id: 1,
                event: WindowEventKind::Other
            })
        );
    }

    #[test]
    fn test_unrelated_event_dropped() {
        let event = Event::AppLowMemory { timestamp: 0 };
        assert_eq!(IoEvents::from_sdl(&event), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(translate_key(Keycode::Return), Key::Return);
        assert_eq!(translate_key(Keycode::Escape), Key::Escape);
        assert_eq!(translate_key(Keycode::Num3), Key::Digit(3));
        assert_eq!(translate_key(Keycode::A), Key::Other);
    }
}
