//! Achievement card system
//!
//! Badge cards and the decorative panel that frames them.

mod achievement_card;
mod bordered_panel;

pub use achievement_card::AchievementCard;
pub use bordered_panel::BorderedPanel;
