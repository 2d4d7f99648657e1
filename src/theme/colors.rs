//! Color constants for the Stride design system.
//!
//! Dark track-at-night palette with warm badge accents.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT_BLACK: &str = "#0b0d10";
pub const NIGHT_LIGHTER: &str = "#12151a";
pub const NIGHT_BORDER: &str = "#1f242c";

// === EMBER (Badges, Highlights) ===
pub const AMBER: &str = "#f59e0b";
pub const AMBER_GLOW: &str = "rgba(245, 158, 11, 0.45)";
pub const ORANGE: &str = "#fb923c";
pub const ORANGE_GLOW: &str = "rgba(251, 146, 60, 0.45)";
pub const YELLOW: &str = "#fde047";
pub const YELLOW_GLOW: &str = "rgba(253, 224, 71, 0.45)";
pub const RED: &str = "#ef4444";
pub const RED_GLOW: &str = "rgba(239, 68, 68, 0.45)";

// === PACE GREEN (Primary, Progress) ===
pub const EMERALD: &str = "#34d399";
pub const EMERALD_GLOW: &str = "rgba(52, 211, 153, 0.45)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f4f4f5";
pub const TEXT_SECONDARY: &str = "rgba(244, 244, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(244, 244, 245, 0.45)";
