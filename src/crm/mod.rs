//! # CRM
//!
//! Lead book for the CRM page: search and stage filtering, golden clients,
//! pipeline aggregates and the "new lead" form.
//!
//! ## Usage
//!
//! ```rust
//! use blitzseller::crm::{LeadBook, NewLead, StageFilter};
//!
//! let mut book = LeadBook::seeded();
//! let mut form = NewLead::default();
//! form.name = "Carla Dias".to_string();
//! form.company = "Dias & Filhos".to_string();
//! form.value = "4200".to_string();
//! book.add_lead(form);
//!
//! assert_eq!(book.filter("dias", StageFilter::All).len(), 1);
//! ```

use std::collections::HashMap;

use chrono::Utc;
use log::info;

use crate::logutil::{escape_log, mask_email};
use crate::seed;
use crate::types::{Lead, LeadStage, MaritalStatus};

/// Interest option that swaps the checklist for free text.
pub const NONE_OF_THE_ABOVE: &str = "nenhuma das anteriores";

pub const PREDEFINED_INTERESTS: [&str; 15] = [
    "Esportes",
    "Carros",
    "Viagens",
    "Música",
    "Leitura",
    "Jardinagem",
    "Culinária",
    "Jogos",
    "Fotografia",
    "Cinema e Séries",
    "Artes e Artesanato",
    "Tecnologia",
    "Moda",
    "Caminhadas e Natureza",
    "Dança",
];

/// Stage selector of the lead list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageFilter {
    #[default]
    All,
    Only(LeadStage),
}

impl StageFilter {
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(StageFilter::All);
        }
        LeadStage::parse(s).map(StageFilter::Only)
    }

    fn matches(&self, stage: LeadStage) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Only(wanted) => *wanted == stage,
        }
    }
}

/// Raw "new lead" form fields. `value` is kept as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub company: String,
    pub interests: Vec<String>,
    pub custom_interests: String,
    pub referred_by: String,
    pub marital_status: String,
    pub has_children: bool,
    pub last_contact_type: String,
    pub last_contact_notes: String,
    pub value: String,
    pub source: String,
}

impl NewLead {
    /// Checkbox behavior: "nenhuma das anteriores" is exclusive with the
    /// predefined interests.
    pub fn toggle_interest(&mut self, interest: &str, checked: bool) {
        if interest == NONE_OF_THE_ABOVE {
            self.interests.clear();
            self.custom_interests.clear();
            if checked {
                self.interests.push(NONE_OF_THE_ABOVE.to_string());
            }
            return;
        }
        if checked {
            self.interests.retain(|i| i != NONE_OF_THE_ABOVE);
            if !self.interests.iter().any(|i| i == interest) {
                self.interests.push(interest.to_string());
            }
        } else {
            self.interests.retain(|i| i != interest);
        }
    }

    pub fn final_interests(&self) -> String {
        if self.interests.iter().any(|i| i == NONE_OF_THE_ABOVE) {
            self.custom_interests.clone()
        } else {
            self.interests.join(", ")
        }
    }
}

/// Leading-number parse of a typed amount; anything unparseable is 0.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in trimmed.char_indices() {
        let ok = ch.is_ascii_digit()
            || (i == 0 && (ch == '-' || ch == '+'))
            || (ch == '.' && !seen_dot);
        if !ok {
            break;
        }
        if ch == '.' {
            seen_dot = true;
        }
        end = i + ch.len_utf8();
    }
    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeadBook {
    leads: Vec<Lead>,
}

impl LeadBook {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    pub fn seeded() -> Self {
        Self::new(seed::starter_leads())
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn get(&self, id: &str) -> Option<&Lead> {
        self.leads.iter().find(|l| l.id == id)
    }

    /// Case-insensitive substring search over name and company, plus stage.
    pub fn filter(&self, search: &str, stage: StageFilter) -> Vec<&Lead> {
        let needle = search.to_lowercase();
        self.leads
            .iter()
            .filter(|l| {
                l.name.to_lowercase().contains(&needle)
                    || l.company.to_lowercase().contains(&needle)
            })
            .filter(|l| stage.matches(l.stage))
            .collect()
    }

    pub fn golden_clients(&self) -> Vec<&Lead> {
        self.leads.iter().filter(|l| l.is_golden_client).collect()
    }

    pub fn total_value(&self) -> f64 {
        self.leads.iter().map(|l| l.value).sum()
    }

    pub fn average_probability(&self) -> f64 {
        if self.leads.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.leads.iter().map(|l| l.probability).sum();
        f64::from(sum) / self.leads.len() as f64
    }

    /// Value of each stage's leads, zero for empty stages.
    pub fn pipeline_by_stage(&self) -> Vec<(LeadStage, f64)> {
        let mut totals: HashMap<LeadStage, f64> = HashMap::new();
        for lead in &self.leads {
            *totals.entry(lead.stage).or_default() += lead.value;
        }
        LeadStage::ALL
            .into_iter()
            .map(|stage| (stage, totals.get(&stage).copied().unwrap_or(0.0)))
            .collect()
    }

    /// Sum of value × probability over every lead.
    pub fn weighted_forecast(&self) -> f64 {
        self.leads
            .iter()
            .map(|l| l.value * f64::from(l.probability) / 100.0)
            .sum()
    }

    /// Append a lead built from the form. New leads start as prospects at
    /// 25% with today as the last contact.
    pub fn add_lead(&mut self, form: NewLead) -> &Lead {
        let lead = Lead {
            id: uuid::Uuid::new_v4().to_string(),
            interests: Some(form.final_interests()),
            value: parse_amount(&form.value),
            marital_status: MaritalStatus::parse(&form.marital_status),
            has_children: Some(form.has_children),
            address: non_empty(&form.address),
            referred_by: non_empty(&form.referred_by),
            last_contact_type: non_empty(&form.last_contact_type),
            last_contact_notes: non_empty(&form.last_contact_notes),
            name: form.name,
            email: form.email,
            phone: form.phone,
            company: form.company,
            stage: LeadStage::Prospect,
            probability: 25,
            last_contact: Utc::now().date_naive(),
            source: form.source,
            is_golden_client: false,
        };
        info!(
            "Lead added: {} <{}>",
            escape_log(&lead.name),
            mask_email(&lead.email)
        );
        let index = self.leads.len();
        self.leads.push(lead);
        &self.leads[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_and_stage() {
        let book = LeadBook::seeded();
        assert_eq!(book.filter("", StageFilter::All).len(), 3);
        assert_eq!(book.filter("TECH", StageFilter::All).len(), 1);
        assert_eq!(book.filter("maria", StageFilter::All).len(), 1);
        assert_eq!(
            book.filter("", StageFilter::Only(LeadStage::Negotiation))[0].name,
            "Pedro Costa"
        );
        assert!(book
            .filter("maria", StageFilter::Only(LeadStage::Closed))
            .is_empty());
    }

    #[test]
    fn test_aggregates() {
        let book = LeadBook::seeded();
        assert_eq!(book.golden_clients().len(), 2);
        assert_eq!(book.total_value(), 48500.0);
        assert!((book.average_probability() - 73.333).abs() < 0.01);
        assert_eq!(LeadBook::default().average_probability(), 0.0);
    }

    #[test]
    fn test_pipeline_and_forecast() {
        let book = LeadBook::seeded();
        let pipeline = book.pipeline_by_stage();
        assert_eq!(pipeline.len(), 5);
        assert_eq!(pipeline[0], (LeadStage::Prospect, 0.0));
        assert_eq!(pipeline[3], (LeadStage::Negotiation, 25000.0));
        // 11250 + 5100 + 21250
        assert!((book.weighted_forecast() - 37600.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_lead_defaults() {
        let mut book = LeadBook::seeded();
        let form = NewLead {
            name: "Carla".to_string(),
            company: "Dias".to_string(),
            value: "abc".to_string(),
            ..Default::default()
        };
        let lead = book.add_lead(form).clone();
        assert_eq!(lead.stage, LeadStage::Prospect);
        assert_eq!(lead.probability, 25);
        assert_eq!(lead.value, 0.0);
        assert!(!lead.is_golden_client);
        assert_eq!(lead.last_contact, Utc::now().date_naive());
        assert_eq!(book.leads().len(), 4);
    }

    #[test]
    fn test_interests() {
        let mut form = NewLead::default();
        form.toggle_interest("Esportes", true);
        form.toggle_interest("Música", true);
        assert_eq!(form.final_interests(), "Esportes, Música");

        form.toggle_interest(NONE_OF_THE_ABOVE, true);
        assert_eq!(form.interests, vec![NONE_OF_THE_ABOVE.to_string()]);
        form.custom_interests = "Pesca".to_string();
        assert_eq!(form.final_interests(), "Pesca");

        form.toggle_interest("Moda", true);
        assert_eq!(form.final_interests(), "Moda");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 12.5k"), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("R$ 10"), 0.0);
    }
}
