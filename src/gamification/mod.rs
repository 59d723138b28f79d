//! # Gamification
//!
//! In-memory containers behind the gamification page: quests, achievements,
//! the rewards store, the leaderboard, rejection practice and the technique
//! library. Each container starts from the records in [`crate::seed`] and lives for
//! one console session; nothing here is persisted.
//!
//! ## Usage
//!
//! ```rust
//! use blitzseller::gamification::QuestBoard;
//!
//! let mut board = QuestBoard::seeded();
//! board.add_progress("1", 3);
//! let reward = board.complete_quest("1");
//! assert!(reward.is_some());
//! ```

pub mod achievement;
pub mod leaderboard;
pub mod practice;
pub mod quest;
pub mod store;
pub mod techniques;

pub use achievement::{AchievementPanel, CategoryProgress};
pub use leaderboard::{is_current_user, rank_badge, Leaderboard, LeaderboardMetric};
pub use practice::{score_response, PracticeResult, RejectionSimulator};
pub use quest::{format_quest_line, QuestBoard, QuestReward, DEFAULT_COMPLETE_DELAY};
pub use store::{RewardsStore, StoreNotice};
pub use techniques::{TechniqueLibrary, TECHNIQUE_CATEGORIES};
