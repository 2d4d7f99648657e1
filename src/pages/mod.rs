//! Page components for Stride.

mod achievements;
mod landing;

pub use achievements::Achievements;
pub use landing::Landing;
