//! UI Components for Stride.

pub mod cards;

pub use cards::{AchievementCard, BorderedPanel};
