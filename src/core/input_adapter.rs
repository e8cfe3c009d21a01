use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, InputEvent};
use super::window::WindowDimensions;

/// Adapter that turns Winit window events into [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct WinitController {
    dimensions: WindowDimensions,
}

impl WinitController {
    pub fn new(dimensions: WindowDimensions) -> Self {
        Self { dimensions }
    }

    /// Process a Winit WindowEvent, returning the discrete input it carries
    ///
    /// Keys produce [`InputEvent::Pressed`] on key-down only.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                key_event(Self::keycode_to_button(keycode)?, event.state)
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.cursor_moved(position.x as f32, position.y as f32))
            }
            WindowEvent::Resized(size) => Some(self.resized(size.width, size.height)),
            _ => None,
        }
    }

    /// Events the scene tracks even when the overlay consumed them
    pub fn bypasses_overlay(event: &WindowEvent) -> bool {
        matches!(event, WindowEvent::Resized(_) | WindowEvent::CursorMoved { .. })
    }

    /// Produce the pointer event for a cursor position in physical pixels
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> InputEvent {
        let (x, y) = self.dimensions.normalize_pointer(x, y);
        InputEvent::PointerMoved { x, y }
    }

    pub fn resized(&mut self, width: u32, height: u32) -> InputEvent {
        self.dimensions = WindowDimensions::new(width, height);
        InputEvent::Resized { width, height }
    }

    pub fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyH => Some(Button::KeyH),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::Enter | KeyCode::NumpadEnter => Some(Button::Enter),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

fn key_event(button: Button, state: ElementState) -> Option<InputEvent> {
    match state {
        ElementState::Pressed => Some(InputEvent::Pressed(button)),
        ElementState::Released => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;

    // Winit keyboard events carry platform-private fields, so key handling
    // is driven through the mapping helpers instead.

    #[test]
    fn test_only_key_down_produces_pressed() {
        assert_eq!(
            key_event(Button::Escape, ElementState::Pressed),
            Some(InputEvent::Pressed(Button::Escape))
        );
        assert_eq!(key_event(Button::Escape, ElementState::Released), None);
        assert_eq!(key_event(Button::KeyH, ElementState::Released), None);
    }

    #[test]
    fn test_cursor_is_normalized_against_latest_size() {
        let mut controller = WinitController::new(WindowDimensions::new(800, 600));

        assert_eq!(
            controller.cursor_moved(800.0, 0.0),
            InputEvent::PointerMoved { x: 1.0, y: 1.0 }
        );

        controller.resized(1600, 1200);
        assert_eq!(controller.dimensions(), WindowDimensions::new(1600, 1200));
        assert_eq!(
            controller.cursor_moved(800.0, 600.0),
            InputEvent::PointerMoved { x: 0.0, y: 0.0 }
        );
    }

    #[test]
    fn test_cursor_and_resize_events_bypass_overlay() {
        let device_id = unsafe { DeviceId::dummy() };
        let moved = WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(400.0, 300.0),
        };
        let resized = WindowEvent::Resized(PhysicalSize::new(1024, 768));

        assert!(WinitController::bypasses_overlay(&moved));
        assert!(WinitController::bypasses_overlay(&resized));
        assert!(!WinitController::bypasses_overlay(&WindowEvent::Focused(true)));
        assert!(!WinitController::bypasses_overlay(&WindowEvent::CloseRequested));
    }

    #[test]
    fn test_cursor_event_reaches_pointer_mapping() {
        let mut controller = WinitController::new(WindowDimensions::new(800, 600));
        let moved = WindowEvent::CursorMoved {
            device_id: unsafe { DeviceId::dummy() },
            position: PhysicalPosition::new(0.0, 600.0),
        };

        assert_eq!(
            controller.process_event(&moved),
            Some(InputEvent::PointerMoved { x: -1.0, y: -1.0 })
        );
        assert_eq!(controller.process_event(&WindowEvent::Focused(false)), None);
    }

    #[test]
    fn test_key_mapping_ignores_unbound_keys() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyH), Some(Button::KeyH));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyE), Some(Button::KeyE));
        assert_eq!(WinitController::keycode_to_button(KeyCode::NumpadEnter), Some(Button::Enter));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), None);
    }
}
