//! Quest board: the in-memory quest list behind the gamification page.
//!
//! Quest rewards are reported to the caller on completion but never credited
//! to the user record; the board has no reference to the session.
use std::fmt;
use std::time::Duration;

use chrono::Utc;
use log::{debug, info};

use crate::seed;
use crate::types::{Quest, QuestType};

/// Delay before a quest card flips to completed.
pub const DEFAULT_COMPLETE_DELAY: Duration = Duration::from_millis(500);

/// Reward metadata of a quest that was just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestReward {
    pub xp: u32,
    pub coins: u32,
}

impl fmt::Display for QuestReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Você ganhou {} XP e {} moedas!", self.xp, self.coins)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestBoard {
    quests: Vec<Quest>,
}

impl QuestBoard {
    pub fn new(quests: Vec<Quest>) -> Self {
        Self { quests }
    }

    /// Board seeded with the starter quests.
    pub fn seeded() -> Self {
        Self::new(seed::starter_quests())
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    /// Mark a quest completed and fill its counter. Completing an already
    /// completed quest changes nothing and yields no reward.
    pub fn complete_quest(&mut self, quest_id: &str) -> Option<QuestReward> {
        let quest = self.quests.iter_mut().find(|q| q.id == quest_id)?;
        if quest.completed {
            return None;
        }
        quest.completed = true;
        quest.completed_at = Some(Utc::now());
        quest.current_value = quest.target_value;
        info!("Quest {} completed", quest.id);
        Some(QuestReward {
            xp: quest.xp_reward,
            coins: quest.coin_reward,
        })
    }

    /// Add progress, clamped at the target. Completed quests are left alone.
    /// Returns whether the counter moved.
    pub fn add_progress(&mut self, quest_id: &str, amount: u32) -> bool {
        let Some(quest) = self.quests.iter_mut().find(|q| q.id == quest_id) else {
            return false;
        };
        if quest.completed {
            return false;
        }
        let before = quest.current_value;
        quest.current_value = quest.current_value.saturating_add(amount).min(quest.target_value);
        debug!(
            "Quest {} progress {} -> {}/{}",
            quest.id, before, quest.current_value, quest.target_value
        );
        quest.current_value != before
    }

    /// Drop every daily quest and hand out the two fresh ones.
    pub fn generate_daily_quests(&mut self) {
        self.quests.retain(|q| q.quest_type != QuestType::Daily);
        self.quests.extend(seed::fresh_daily_quests());
        info!("Generated new daily quests");
    }

    /// Card flow: only a quest at its target can be claimed; the flip to
    /// completed happens after `delay`.
    pub async fn claim(&mut self, quest_id: &str, delay: Duration) -> Option<QuestReward> {
        if !self.get(quest_id)?.can_complete() {
            return None;
        }
        tokio::time::sleep(delay).await;
        self.complete_quest(quest_id)
    }

    fn of_type(&self, quest_type: QuestType) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.quest_type == quest_type).collect()
    }

    pub fn daily_quests(&self) -> Vec<&Quest> {
        self.of_type(QuestType::Daily)
    }

    pub fn weekly_quests(&self) -> Vec<&Quest> {
        self.of_type(QuestType::Weekly)
    }

    pub fn special_quests(&self) -> Vec<&Quest> {
        self.of_type(QuestType::Special)
    }

    pub fn completed_quests(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|q| q.completed).collect()
    }

    pub fn active_quests(&self) -> Vec<&Quest> {
        self.quests.iter().filter(|q| !q.completed).collect()
    }

    /// Share of today's daily quests already completed, rounded percent.
    pub fn daily_progress(&self) -> u32 {
        let daily = self.daily_quests();
        if daily.is_empty() {
            return 0;
        }
        let done = daily.iter().filter(|q| q.completed).count();
        ((done as f64 / daily.len() as f64) * 100.0).round() as u32
    }
}

/// One-line rendering used by the console quest list.
pub fn format_quest_line(quest: &Quest) -> String {
    let status = if quest.completed { "✓" } else { " " };
    format!(
        "[{}] {} {} [{}/{}] {:.0}% +{} XP +{} moedas",
        status,
        quest.id,
        quest.title,
        quest.current_value,
        quest.target_value,
        quest.progress_percent(),
        quest.xp_reward,
        quest.coin_reward
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, QuestCategory};

    fn board() -> QuestBoard {
        QuestBoard::new(vec![
            Quest::new("d1", "Ligar", "", QuestType::Daily, Difficulty::Easy, QuestCategory::Calls, 3)
                .with_rewards(60, 12),
            Quest::new("w1", "Reunir", "", QuestType::Weekly, Difficulty::Medium, QuestCategory::Meetings, 2),
            Quest::new("s1", "Dourado", "", QuestType::Special, Difficulty::Hard, QuestCategory::Closing, 1),
        ])
    }

    #[test]
    fn test_add_progress_clamps() {
        let mut board = board();
        assert!(board.add_progress("d1", 2));
        assert!(board.add_progress("d1", 5));
        assert_eq!(board.get("d1").unwrap().current_value, 3);
        assert!(!board.add_progress("d1", 1));
        assert!(!board.add_progress("missing", 1));
    }

    #[test]
    fn test_complete_twice() {
        let mut board = board();
        assert_eq!(
            board.complete_quest("w1"),
            Some(QuestReward { xp: 0, coins: 0 })
        );
        let stamped = board.get("w1").unwrap().completed_at;
        assert_eq!(board.complete_quest("w1"), None);

        let quest = board.get("w1").unwrap();
        assert!(quest.completed);
        assert_eq!(quest.current_value, quest.target_value);
        assert_eq!(quest.completed_at, stamped);
    }

    #[test]
    fn test_progress_ignored_after_completion() {
        let mut board = board();
        board.complete_quest("d1");
        assert!(!board.add_progress("d1", 1));
        assert_eq!(board.get("d1").unwrap().current_value, 3);
    }

    #[test]
    fn test_generate_daily_keeps_others() {
        let mut board = board();
        board.complete_quest("w1");
        board.generate_daily_quests();

        let daily = board.daily_quests();
        assert_eq!(daily.len(), 2);
        assert!(daily.iter().all(|q| q.current_value == 0 && !q.completed));
        assert!(board.get("d1").is_none());
        assert!(board.get("w1").unwrap().completed);
        assert!(board.get("s1").is_some());
    }

    #[test]
    fn test_daily_progress_percent() {
        let mut board = board();
        assert_eq!(board.daily_progress(), 0);
        board.complete_quest("d1");
        assert_eq!(board.daily_progress(), 100);
        board.generate_daily_quests();
        assert_eq!(board.daily_progress(), 0);
        let first = board.daily_quests()[0].id.clone();
        board.complete_quest(&first);
        assert_eq!(board.daily_progress(), 50);
    }

    #[tokio::test]
    async fn test_claim_requires_target() {
        let mut board = board();
        assert_eq!(board.claim("d1", Duration::ZERO).await, None);
        board.add_progress("d1", 3);
        let reward = board.claim("d1", Duration::ZERO).await.unwrap();
        assert_eq!(reward.to_string(), "Você ganhou 60 XP e 12 moedas!");
        assert_eq!(board.claim("d1", Duration::ZERO).await, None);
    }

    #[test]
    fn test_format_quest_line() {
        let board = board();
        let line = format_quest_line(board.get("d1").unwrap());
        assert!(line.contains("Ligar"));
        assert!(line.contains("[0/3] 0%"));
    }
}
