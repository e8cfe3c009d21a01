mod angle;
mod color;

pub use angle::{wrap_angle, wrapped_product};
pub use color::{hsl_to_rgb, hsv_to_rgb, rgb_from_hex, Rgb};
