//! Record types shared by the session store and the dashboard containers.
//!
//! Records serialize with camelCase keys and kebab-case enum values so a
//! stored session reads the same way the web dashboard wrote it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Starting values for every fabricated user.
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_XP: u32 = 0;
pub const STARTING_COINS: u32 = 50;
pub const STARTING_STREAK: u32 = 0;

/// XP needed per level on the dashboard progress bar.
pub const XP_PER_LEVEL: u32 = 500;

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Segment {
    DoorToDoor,
    MedicalBusiness,
    SpeakerScheduler,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Segment::DoorToDoor => "Porta em Porta (Residencial)",
            Segment::MedicalBusiness => "Médicos e Empresários (B2B)",
            Segment::SpeakerScheduler => "Agendista/Palestrante (Empresas)",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "door-to-door" => Some(Segment::DoorToDoor),
            "medical-business" => Some(Segment::MedicalBusiness),
            "speaker-scheduler" => Some(Segment::SpeakerScheduler),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub level: u32,
    pub xp: u32,
    pub coins: u32,
    pub streak: u32,
    pub joined_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_segment: Option<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_segment: Option<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geographic_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

impl User {
    /// Fabricate a fresh user with the starting stats.
    pub fn new(name: &str, email: &str) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: None,
            level: STARTING_LEVEL,
            xp: STARTING_XP,
            coins: STARTING_COINS,
            streak: STARTING_STREAK,
            joined_at: now,
            last_active_at: now,
            primary_segment: None,
            secondary_segment: None,
            geographic_area: None,
            role: Some(UserRole::User),
        }
    }

    /// Name shown after a plain login: the part of the email before `@`.
    pub fn name_from_email(email: &str) -> String {
        email.split('@').next().unwrap_or_default().to_string()
    }

    pub fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    pub fn xp_to_next_level(&self) -> u32 {
        self.level.max(1) * XP_PER_LEVEL
    }

    pub fn xp_remaining(&self) -> u32 {
        self.xp_to_next_level().saturating_sub(self.xp)
    }

    pub fn level_progress_percent(&self) -> f64 {
        f64::from(self.xp) / f64::from(self.xp_to_next_level()) * 100.0
    }
}

/// Partial user update; `None` fields keep their current value. The optional
/// profile fields take `Some(None)` to clear the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub level: Option<u32>,
    pub xp: Option<u32>,
    pub coins: Option<u32>,
    pub streak: Option<u32>,
    pub primary_segment: Option<Segment>,
    pub secondary_segment: Option<Option<Segment>>,
    pub geographic_area: Option<Option<String>>,
    pub role: Option<UserRole>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        *self == UserUpdate::default()
    }

    /// Shallow merge into `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(v) = self.name {
            user.name = v;
        }
        if let Some(v) = self.email {
            user.email = v;
        }
        if let Some(v) = self.avatar {
            user.avatar = Some(v);
        }
        if let Some(v) = self.level {
            user.level = v;
        }
        if let Some(v) = self.xp {
            user.xp = v;
        }
        if let Some(v) = self.coins {
            user.coins = v;
        }
        if let Some(v) = self.streak {
            user.streak = v;
        }
        if let Some(v) = self.primary_segment {
            user.primary_segment = Some(v);
        }
        if let Some(v) = self.secondary_segment {
            user.secondary_segment = v;
        }
        if let Some(v) = self.geographic_area {
            user.geographic_area = v;
        }
        if let Some(v) = self.role {
            user.role = Some(v);
        }
    }
}

// ============================================================================
// Quests
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    Daily,
    Weekly,
    Special,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Prospecting,
    Calls,
    Meetings,
    Closing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub xp_reward: u32,
    pub coin_reward: u32,
    pub difficulty: Difficulty,
    pub category: QuestCategory,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub target_value: u32,
    pub current_value: u32,
}

impl Quest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        quest_type: QuestType,
        difficulty: Difficulty,
        category: QuestCategory,
        target_value: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            quest_type,
            xp_reward: 0,
            coin_reward: 0,
            difficulty,
            category,
            completed: false,
            completed_at: None,
            target_value,
            current_value: 0,
        }
    }

    pub fn with_rewards(mut self, xp: u32, coins: u32) -> Self {
        self.xp_reward = xp;
        self.coin_reward = coins;
        self
    }

    pub fn with_progress(mut self, current: u32) -> Self {
        self.current_value = current.min(self.target_value);
        self
    }

    /// Progress bar value, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_value == 0 {
            return 100.0;
        }
        (f64::from(self.current_value) / f64::from(self.target_value) * 100.0).min(100.0)
    }

    /// Target reached but not yet claimed.
    pub fn can_complete(&self) -> bool {
        !self.completed && self.current_value >= self.target_value
    }
}

// ============================================================================
// Achievements
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Sales,
    Activity,
    Streak,
    Special,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 4] = [
        AchievementCategory::Sales,
        AchievementCategory::Activity,
        AchievementCategory::Streak,
        AchievementCategory::Special,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AchievementCategory::Sales => "Vendas",
            AchievementCategory::Activity => "Atividade",
            AchievementCategory::Streak => "Sequência",
            AchievementCategory::Special => "Especiais",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub xp_reward: u32,
    pub coin_reward: u32,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
    pub category: AchievementCategory,
}

// ============================================================================
// CRM
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    Prospect,
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl LeadStage {
    pub const ALL: [LeadStage; 5] = [
        LeadStage::Prospect,
        LeadStage::Qualified,
        LeadStage::Proposal,
        LeadStage::Negotiation,
        LeadStage::Closed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadStage::Prospect => "Prospecto",
            LeadStage::Qualified => "Qualificado",
            LeadStage::Proposal => "Proposta",
            LeadStage::Negotiation => "Negociação",
            LeadStage::Closed => "Fechado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prospect" => Some(LeadStage::Prospect),
            "qualified" => Some(LeadStage::Qualified),
            "proposal" => Some(LeadStage::Proposal),
            "negotiation" => Some(LeadStage::Negotiation),
            "closed" => Some(LeadStage::Closed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Some(MaritalStatus::Single),
            "married" => Some(MaritalStatus::Married),
            "divorced" => Some(MaritalStatus::Divorced),
            "widowed" => Some(MaritalStatus::Widowed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    pub company: String,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub referred_by: Option<String>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub last_contact_type: Option<String>,
    #[serde(default)]
    pub last_contact_notes: Option<String>,
    pub value: f64,
    pub stage: LeadStage,
    pub probability: u32,
    pub last_contact: NaiveDate,
    pub source: String,
    pub is_golden_client: bool,
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InventoryCategory {
    Religious,
    Health,
    Family,
    Education,
    Children,
}

impl InventoryCategory {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryCategory::Religious => "Religioso",
            InventoryCategory::Health => "Saúde",
            InventoryCategory::Family => "Família",
            InventoryCategory::Education => "Educação",
            InventoryCategory::Children => "Infantil",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "religious" => Some(InventoryCategory::Religious),
            "health" => Some(InventoryCategory::Health),
            "family" => Some(InventoryCategory::Family),
            "education" => Some(InventoryCategory::Education),
            "children" => Some(InventoryCategory::Children),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub title: String,
    pub category: InventoryCategory,
    pub stock: u32,
    pub price: f64,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Rewards store
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StoreCategory {
    PowerUps,
    Customization,
    Rewards,
    Training,
}

impl StoreCategory {
    pub const ALL: [StoreCategory; 4] = [
        StoreCategory::PowerUps,
        StoreCategory::Customization,
        StoreCategory::Rewards,
        StoreCategory::Training,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StoreCategory::PowerUps => "Power-ups",
            StoreCategory::Customization => "Personalização",
            StoreCategory::Rewards => "Recompensas",
            StoreCategory::Training => "Treinamento",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoreItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: StoreCategory,
    pub icon: String,
    pub available: bool,
}

// ============================================================================
// Leaderboard
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardUser {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
    pub sales_this_month: u32,
    pub rank: u32,
}

// ============================================================================
// Rejection practice
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ScenarioDifficulty {
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioDifficulty::Beginner => "Iniciante",
            ScenarioDifficulty::Intermediate => "Intermediário",
            ScenarioDifficulty::Advanced => "Avançado",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectionCategory {
    Price,
    Timing,
    Authority,
    Need,
    Competition,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectionScenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: ScenarioDifficulty,
    pub category: ObjectionCategory,
    pub scenario: String,
    pub suggested_responses: Vec<String>,
    pub tips: Vec<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Sales techniques
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalesTechnique {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: ScenarioDifficulty,
    pub description: String,
    pub steps: Vec<String>,
    pub example: String,
    pub tips: Vec<String>,
    pub when_to_use: String,
}

// ============================================================================
// Analytics
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: u32,
    pub active_leads: u32,
    pub closed_deals: u32,
    pub revenue: f64,
    pub conversion_rate: f64,
    pub average_deal_size: f64,
    pub activities_this_week: u32,
    pub calls_today: u32,
    pub meetings_scheduled: u32,
    pub streak: u32,
}
