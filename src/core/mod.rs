pub mod clock;
pub mod controller;
pub mod gpu_context;
pub mod input_adapter;
pub mod timer;
pub mod window;

pub use clock::Clock;
pub use controller::{Button, InputEvent};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use timer::{FpsMeter, Throttled};
pub use window::WindowDimensions;
