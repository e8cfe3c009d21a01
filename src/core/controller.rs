/// Keyboard shortcut identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// `h` / `H` - back to the welcome screen
    KeyH,
    /// `e` / `E` - emergency request from the dashboard
    KeyE,
    Enter,
    Escape,
}

/// Discrete input the shell forwards to the scene and view controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key went down
    Pressed(Button),
    /// Pointer moved, normalized to [-1, 1] with y up
    PointerMoved { x: f32, y: f32 },
    /// Drawable area changed size in physical pixels
    Resized { width: u32, height: u32 },
}
