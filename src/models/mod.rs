pub mod image;
pub mod telegram;

pub use image::*;
pub use telegram::*;
