//! Achievement panel: read-only views over the achievement list.

use crate::seed;
use crate::types::{Achievement, AchievementCategory};

/// Unlocked/total pair shown on each category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProgress {
    pub category: AchievementCategory,
    pub unlocked: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AchievementPanel {
    achievements: Vec<Achievement>,
}

impl AchievementPanel {
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    pub fn seeded() -> Self {
        Self::new(seed::starter_achievements())
    }

    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn unlocked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.unlocked).collect()
    }

    pub fn locked(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| !a.unlocked).collect()
    }

    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// One entry per category, in display order.
    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        AchievementCategory::ALL
            .into_iter()
            .map(|category| {
                let in_category = self.by_category(category);
                CategoryProgress {
                    category,
                    unlocked: in_category.iter().filter(|a| a.unlocked).count(),
                    total: in_category.len(),
                }
            })
            .collect()
    }

    pub fn total_xp_earned(&self) -> u32 {
        self.unlocked().iter().map(|a| a.xp_reward).sum()
    }

    pub fn total_coins_earned(&self) -> u32 {
        self.unlocked().iter().map(|a| a.coin_reward).sum()
    }

    /// Rounded percentage of unlocked achievements; 0 for an empty panel.
    pub fn completion_percent(&self) -> u32 {
        if self.achievements.is_empty() {
            return 0;
        }
        let unlocked = self.unlocked().len() as f64;
        (unlocked / self.achievements.len() as f64 * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_totals() {
        let panel = AchievementPanel::seeded();
        assert_eq!(panel.unlocked().len(), 2);
        assert_eq!(panel.locked().len(), 3);
        assert_eq!(panel.total_xp_earned(), 300);
        assert_eq!(panel.total_coins_earned(), 60);
        assert_eq!(panel.completion_percent(), 40);
    }

    #[test]
    fn test_category_progress() {
        let panel = AchievementPanel::seeded();
        let progress = panel.category_progress();
        assert_eq!(progress.len(), 4);
        let sales = progress
            .iter()
            .find(|p| p.category == AchievementCategory::Sales)
            .unwrap();
        assert_eq!((sales.unlocked, sales.total), (1, 2));
    }

    #[test]
    fn test_empty_panel() {
        let panel = AchievementPanel::default();
        assert_eq!(panel.completion_percent(), 0);
        assert_eq!(panel.total_xp_earned(), 0);
    }
}
