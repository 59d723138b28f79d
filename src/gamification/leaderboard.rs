//! Leaderboard rankings.

use std::fmt;

use crate::seed;
use crate::types::{LeaderboardUser, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardMetric {
    #[default]
    Xp,
    Sales,
    Streak,
}

impl LeaderboardMetric {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xp" => Some(LeaderboardMetric::Xp),
            "sales" | "vendas" => Some(LeaderboardMetric::Sales),
            "streak" | "sequencia" | "sequência" => Some(LeaderboardMetric::Streak),
            _ => None,
        }
    }

    fn value(&self, entry: &LeaderboardUser) -> u32 {
        match self {
            LeaderboardMetric::Xp => entry.xp,
            LeaderboardMetric::Sales => entry.sales_this_month,
            LeaderboardMetric::Streak => entry.streak,
        }
    }
}

impl fmt::Display for LeaderboardMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeaderboardMetric::Xp => "XP",
            LeaderboardMetric::Sales => "Vendas",
            LeaderboardMetric::Streak => "Sequência",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<LeaderboardUser>,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(seed::leaderboard())
    }
}

impl Leaderboard {
    pub fn new(entries: Vec<LeaderboardUser>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LeaderboardUser] {
        &self.entries
    }

    /// Entries sorted descending by `metric`. Ties keep their listed order.
    pub fn ranked_by(&self, metric: LeaderboardMetric) -> Vec<&LeaderboardUser> {
        let mut ranked: Vec<&LeaderboardUser> = self.entries.iter().collect();
        ranked.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));
        ranked
    }

    pub fn metric_value(metric: LeaderboardMetric, entry: &LeaderboardUser) -> u32 {
        metric.value(entry)
    }
}

/// "Top 3" for ranks 1..=3, "Top 10" up to 10, nothing below.
pub fn rank_badge(rank: u32) -> Option<&'static str> {
    match rank {
        1..=3 => Some("Top 3"),
        4..=10 => Some("Top 10"),
        _ => None,
    }
}

/// Entries are matched to the viewer by display name.
pub fn is_current_user(entry: &LeaderboardUser, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|u| u.name == entry.name)
}
