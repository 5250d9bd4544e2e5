//! Window input collection
//!
//! Accumulates winit window events between ticks and exposes them through the
//! simulation's [`InputDevice`] contract.

use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::InputDevice;

#[derive(Debug, Default)]
pub struct InputCollector {
    /// Last cursor position in physical window pixels
    cursor_px: (f64, f64),
    window_width: u32,
    window_height: u32,
    fire_is_down: bool,
    backspace_is_down: bool,
    backspace_pressed_edge: bool,
    typed: Vec<char>,
}

impl InputCollector {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            ..Self::default()
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Resized(size) => self.set_window_size(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor_position_px(position.x, position.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(*button, *state);
            }
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard_input(event),
            WindowEvent::Focused(false) => {
                // Release events are lost while unfocused
                self.fire_is_down = false;
                self.backspace_is_down = false;
            }
            _ => {}
        }
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub fn set_cursor_position_px(&mut self, x: f64, y: f64) {
        self.cursor_px = (x, y);
    }

    pub fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.fire_is_down = state == ElementState::Pressed;
        }
    }

    fn handle_keyboard_input(&mut self, event: &KeyEvent) {
        let is_backspace = event.physical_key == PhysicalKey::Code(KeyCode::Backspace);
        self.handle_backspace_state(is_backspace, event.state, event.repeat);
        if event.state == ElementState::Pressed {
            if let Some(text) = &event.text {
                self.push_text(text);
            }
        }
    }

    pub fn handle_backspace_state(&mut self, is_backspace: bool, state: ElementState, repeat: bool) {
        if !is_backspace {
            return;
        }

        match state {
            ElementState::Pressed => {
                if !self.backspace_is_down && !repeat {
                    self.backspace_pressed_edge = true;
                }
                self.backspace_is_down = true;
            }
            ElementState::Released => self.backspace_is_down = false,
        }
    }

    /// Queue typed text; control characters (backspace, enter, tab...) are dropped
    pub fn push_text(&mut self, text: &str) {
        self.typed.extend(text.chars().filter(|c| !c.is_control()));
    }
}

impl InputDevice for InputCollector {
    fn cursor_position(&self) -> (i32, i32) {
        if self.window_width == 0 || self.window_height == 0 {
            return (0, 0);
        }
        let x = self.cursor_px.0 * SCREEN_WIDTH as f64 / self.window_width as f64;
        let y = self.cursor_px.1 * SCREEN_HEIGHT as f64 / self.window_height as f64;
        (x.floor() as i32, y.floor() as i32)
    }

    fn is_backspace_just_pressed(&mut self) -> bool {
        std::mem::take(&mut self.backspace_pressed_edge)
    }

    fn is_fire_held(&self) -> bool {
        self.fire_is_down
    }

    fn drain_typed_chars(&mut self) -> Vec<char> {
        std::mem::take(&mut self.typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_maps_to_logical_coordinates() {
        let mut input = InputCollector::new(1280, 960);
        input.set_cursor_position_px(1279.9, 481.0);
        assert_eq!(input.cursor_position(), (639, 240));

        input.set_window_size(2560, 1920);
        input.set_cursor_position_px(1280.0, 960.0);
        assert_eq!(input.cursor_position(), (320, 240));
    }

    #[test]
    fn test_cursor_outside_window_is_not_clamped() {
        let mut input = InputCollector::new(1280, 960);
        input.set_cursor_position_px(-3.0, 1000.0);
        assert_eq!(input.cursor_position(), (-2, 500));
    }

    #[test]
    fn test_zero_sized_window_reports_origin() {
        let mut input = InputCollector::new(0, 0);
        input.set_cursor_position_px(100.0, 100.0);
        assert_eq!(input.cursor_position(), (0, 0));
    }

    #[test]
    fn test_backspace_edge_once_per_press() {
        let mut input = InputCollector::new(640, 480);
        input.handle_backspace_state(true, ElementState::Pressed, false);
        input.handle_backspace_state(true, ElementState::Pressed, true);
        input.handle_backspace_state(true, ElementState::Pressed, true);
        assert!(input.is_backspace_just_pressed());
        assert!(!input.is_backspace_just_pressed());

        input.handle_backspace_state(true, ElementState::Released, false);
        input.handle_backspace_state(true, ElementState::Pressed, false);
        assert!(input.is_backspace_just_pressed());
    }

    #[test]
    fn test_other_keys_do_not_trigger_backspace() {
        let mut input = InputCollector::new(640, 480);
        input.handle_backspace_state(false, ElementState::Pressed, false);
        assert!(!input.is_backspace_just_pressed());
    }

    #[test]
    fn test_fire_is_level_triggered() {
        let mut input = InputCollector::new(640, 480);
        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);
        assert!(input.is_fire_held());
        assert!(input.is_fire_held());

        input.handle_mouse_input(MouseButton::Right, ElementState::Released);
        assert!(input.is_fire_held());

        input.handle_mouse_input(MouseButton::Left, ElementState::Released);
        assert!(!input.is_fire_held());
    }

    #[test]
    fn test_typed_text_drops_control_characters() {
        let mut input = InputCollector::new(640, 480);
        input.push_text("a");
        input.push_text("\u{8}");
        input.push_text("\r");
        input.push_text("b!");
        assert_eq!(input.drain_typed_chars(), vec!['a', 'b', '!']);
        assert!(input.drain_typed_chars().is_empty());
    }
}
