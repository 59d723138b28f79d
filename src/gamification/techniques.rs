//! Sales technique library with per-session study tracking.

use log::debug;

use crate::seed;
use crate::types::SalesTechnique;

/// Category filter entries, "Todas" first.
pub const TECHNIQUE_CATEGORIES: [&str; 7] = [
    "Todas",
    "Descoberta",
    "Apresentação",
    "Abordagem",
    "Persuasão",
    "Fechamento",
    "Objeções",
];

#[derive(Debug, Clone)]
pub struct TechniqueLibrary {
    techniques: Vec<SalesTechnique>,
    studied: Vec<String>,
}

impl Default for TechniqueLibrary {
    fn default() -> Self {
        Self::new(seed::sales_techniques())
    }
}

impl TechniqueLibrary {
    pub fn new(techniques: Vec<SalesTechnique>) -> Self {
        Self {
            techniques,
            studied: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&SalesTechnique> {
        self.techniques.iter().find(|t| t.id == id)
    }

    /// "Todas" (any case) returns everything.
    pub fn filter(&self, category: &str) -> Vec<&SalesTechnique> {
        if category.eq_ignore_ascii_case("todas") {
            return self.techniques.iter().collect();
        }
        self.techniques
            .iter()
            .filter(|t| t.category.to_lowercase() == category.to_lowercase())
            .collect()
    }

    /// Returns false for unknown ids or techniques already studied.
    pub fn mark_as_studied(&mut self, id: &str) -> bool {
        if self.get(id).is_none() || self.is_studied(id) {
            return false;
        }
        debug!("Technique {} studied", id);
        self.studied.push(id.to_string());
        true
    }

    pub fn is_studied(&self, id: &str) -> bool {
        self.studied.iter().any(|s| s == id)
    }

    pub fn studied_count(&self) -> usize {
        self.studied.len()
    }

    pub fn total(&self) -> usize {
        self.techniques.len()
    }
}
