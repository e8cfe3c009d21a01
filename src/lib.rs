pub mod cli;
pub mod core;
pub mod math;
pub mod overlay;
pub mod renderer;
pub mod scene;
pub mod scene_manager;
pub mod views;

pub use scene_manager::{SceneError, SceneManager};
pub use views::ViewController;
