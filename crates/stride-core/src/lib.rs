//! Stride Core Library
//!
//! Achievement metadata for the Stride running companion.
//!
//! ## Overview
//!
//! Stride gamifies running with unlockable achievements. This crate holds
//! the pieces every consumer has to agree on: the shape of an
//! [`Achievement`] definition and a [`UserAchievement`] unlock record, the
//! closed badge-color and category vocabularies, and the pure lookups that
//! turn a classification key into display attributes (gradient class, glow
//! class, localized label).
//!
//! Everything here is static data and O(1) lookups. Unlock evaluation,
//! persistence, and rendering live in external collaborators; they consume
//! these types and resolvers and nothing more.
//!
//! ## Quick Start
//!
//! ```
//! use stride_core::{display, AchievementRegistry};
//!
//! let registry = AchievementRegistry::builtin();
//! for achievement in registry.all() {
//!     let gradient = display::badge_gradient(&achievement.badge_color);
//!     let label = display::category_label(&achievement.category);
//!     println!("{} [{}] {}", achievement.name, label, gradient);
//! }
//! ```

pub mod display;
pub mod error;
pub mod registry;
pub mod types;

// Re-exports
pub use display::{badge_glow, badge_gradient, category_label};
pub use error::AchievementError;
pub use registry::AchievementRegistry;
pub use types::{sort_achievements, Achievement, BadgeColor, Category, UserAchievement};
