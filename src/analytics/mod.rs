//! # Analytics
//!
//! Static series behind the analytics page and the figures derived from them.
//! The headline [`DashboardStats`] are computed from the same series so the
//! cards and charts always agree.
//!
//! ## Usage
//!
//! ```rust
//! use blitzseller::analytics::Analytics;
//!
//! let analytics = Analytics::default();
//! assert_eq!(analytics.total_sales(), 102);
//! ```

use serde::Serialize;

use crate::types::DashboardStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    pub month: &'static str,
    pub sales: u32,
    pub goal: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyActivity {
    pub day: &'static str,
    pub calls: u32,
    pub meetings: u32,
    pub emails: u32,
}

impl DailyActivity {
    pub fn total(&self) -> u32 {
        self.calls + self.meetings + self.emails
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStage {
    pub name: &'static str,
    pub leads: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPerformance {
    pub week: &'static str,
    pub xp: u32,
    pub level: f64,
}

/// Headline card with its change against the previous month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub change: f64,
}

impl MetricCard {
    pub fn trend_up(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone)]
pub struct Analytics {
    pub sales: Vec<MonthlySales>,
    pub activity: Vec<DailyActivity>,
    pub pipeline: Vec<PipelineStage>,
    pub performance: Vec<WeeklyPerformance>,
}

impl Default for Analytics {
    fn default() -> Self {
        let month = |month, sales, goal, revenue| MonthlySales {
            month,
            sales,
            goal,
            revenue,
        };
        let day = |day, calls, meetings, emails| DailyActivity {
            day,
            calls,
            meetings,
            emails,
        };
        let stage = |name, leads| PipelineStage { name, leads };
        let week = |week, xp, level| WeeklyPerformance { week, xp, level };
        Self {
            sales: vec![
                month("Jan", 12, 15, 18000.0),
                month("Fev", 19, 15, 28500.0),
                month("Mar", 8, 15, 12000.0),
                month("Abr", 22, 20, 33000.0),
                month("Mai", 16, 20, 24000.0),
                month("Jun", 25, 20, 37500.0),
            ],
            activity: vec![
                day("Seg", 8, 3, 12),
                day("Ter", 12, 5, 15),
                day("Qua", 6, 2, 8),
                day("Qui", 15, 4, 18),
                day("Sex", 10, 6, 14),
                day("Sab", 4, 1, 5),
                day("Dom", 2, 0, 3),
            ],
            pipeline: vec![
                stage("Prospecção", 45),
                stage("Qualificação", 23),
                stage("Proposta", 12),
                stage("Negociação", 8),
                stage("Fechamento", 5),
            ],
            performance: vec![
                week("Sem 1", 120, 3.2),
                week("Sem 2", 180, 3.6),
                week("Sem 3", 95, 3.8),
                week("Sem 4", 220, 4.4),
            ],
        }
    }
}

impl Analytics {
    pub fn total_sales(&self) -> u32 {
        self.sales.iter().map(|m| m.sales).sum()
    }

    pub fn total_revenue(&self) -> f64 {
        self.sales.iter().map(|m| m.revenue).sum()
    }

    /// Months whose sales met or beat the goal.
    pub fn months_on_target(&self) -> usize {
        self.sales.iter().filter(|m| m.sales >= m.goal).count()
    }

    /// Sales over goal across the whole series, as a percentage.
    pub fn goal_attainment(&self) -> f64 {
        let goal: u32 = self.sales.iter().map(|m| m.goal).sum();
        if goal == 0 {
            return 0.0;
        }
        f64::from(self.total_sales()) / f64::from(goal) * 100.0
    }

    pub fn weekly_activity_total(&self) -> u32 {
        self.activity.iter().map(DailyActivity::total).sum()
    }

    pub fn busiest_day(&self) -> Option<&DailyActivity> {
        self.activity.iter().max_by_key(|d| d.total())
    }

    /// Funnel conversion of each stage relative to the first one. The first
    /// stage is always 100.
    pub fn pipeline_conversion(&self) -> Vec<(&'static str, f64)> {
        let top = self.pipeline.first().map(|s| s.leads).unwrap_or(0);
        self.pipeline
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let rate = if i == 0 {
                    100.0
                } else if top == 0 {
                    0.0
                } else {
                    f64::from(s.leads) / f64::from(top) * 100.0
                };
                (s.name, rate)
            })
            .collect()
    }

    /// Share of all pipeline leads sitting in each stage.
    pub fn pipeline_shares(&self) -> Vec<(&'static str, f64)> {
        let total: u32 = self.pipeline.iter().map(|s| s.leads).sum();
        self.pipeline
            .iter()
            .map(|s| {
                let share = if total == 0 {
                    0.0
                } else {
                    f64::from(s.leads) / f64::from(total) * 100.0
                };
                (s.name, share)
            })
            .collect()
    }

    pub fn total_xp_gained(&self) -> u32 {
        self.performance.iter().map(|w| w.xp).sum()
    }

    /// Headline figures for a viewer with the given streak.
    pub fn stats(&self, streak: u32) -> DashboardStats {
        let total_leads: u32 = self.pipeline.iter().map(|s| s.leads).sum();
        let closed_deals = self.pipeline.last().map(|s| s.leads).unwrap_or(0);
        let top = self.pipeline.first().map(|s| s.leads).unwrap_or(0);
        let revenue = self.total_revenue();
        let sales = self.total_sales();
        DashboardStats {
            total_leads,
            active_leads: total_leads - closed_deals,
            closed_deals,
            revenue,
            conversion_rate: if top == 0 {
                0.0
            } else {
                (f64::from(closed_deals) / f64::from(top) * 1000.0).round() / 10.0
            },
            average_deal_size: if sales == 0 {
                0.0
            } else {
                revenue / f64::from(sales)
            },
            activities_this_week: self.weekly_activity_total(),
            calls_today: self.activity.first().map(|d| d.calls).unwrap_or(0),
            meetings_scheduled: self.activity.iter().map(|d| d.meetings).sum(),
            streak,
        }
    }

    /// The four headline cards with their month-over-month change.
    pub fn metric_cards(&self, stats: &DashboardStats) -> Vec<MetricCard> {
        vec![
            MetricCard {
                title: "Receita Total",
                value: format_currency(stats.revenue),
                change: 12.5,
            },
            MetricCard {
                title: "Leads Ativos",
                value: stats.active_leads.to_string(),
                change: 8.2,
            },
            MetricCard {
                title: "Taxa de Conversão",
                value: format!("{}%", stats.conversion_rate),
                change: -2.1,
            },
            MetricCard {
                title: "Ticket Médio",
                value: format_currency(stats.average_deal_size),
                change: 15.3,
            },
        ]
    }
}

/// `R$ 153.000` style amounts, whole reais with dot grouping.
pub fn format_currency(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if whole < 0 { "-" } else { "" };
    format!("R$ {}{}", sign, grouped)
}
