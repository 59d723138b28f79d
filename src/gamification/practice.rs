//! Rejection practice.
//!
//! The seller picks an objection scenario, types an answer and gets a score
//! from a length and keyword heuristic. Scored scenarios move to the
//! completed list for the rest of the session.

use chrono::Utc;
use log::{debug, info};

use crate::errors::BlitzError;
use crate::seed;
use crate::logutil::escape_log;
use crate::types::RejectionScenario;

const KEYWORDS: [&str; 3] = ["valor", "benefício", "solução"];

/// Score and feedback for one answered scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeResult {
    pub scenario_id: String,
    pub score: u32,
    pub feedback: &'static str,
}

impl PracticeResult {
    /// Toast text after an evaluation.
    pub fn toast(&self) -> String {
        format!("Você obteve {} pontos neste cenário.", self.score)
    }
}

/// Raw score before rounding. Length counts UTF-16 units, matching how the
/// web form measured answers.
fn raw_score(response: &str) -> f64 {
    let len = response.encode_utf16().count() as f64;
    let mut score = (len / 2.0).max(20.0).min(100.0);
    let lowered = response.to_lowercase();
    if KEYWORDS.iter().any(|k| lowered.contains(k)) {
        score += 20.0;
    }
    if len > 100.0 {
        score += 10.0;
    }
    score
}

fn feedback_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excelente resposta! Você demonstrou confiança e focou no valor."
    } else if score >= 60.0 {
        "Boa resposta! Considere enfatizar mais os benefícios."
    } else {
        "Resposta adequada, mas pode melhorar. Veja as sugestões abaixo."
    }
}

/// Score an answer. Blank answers are not scored.
pub fn score_response(response: &str) -> Option<(u32, &'static str)> {
    if response.trim().is_empty() {
        return None;
    }
    let score = raw_score(response);
    Some((score.round() as u32, feedback_for(score)))
}

#[derive(Debug, Clone)]
pub struct RejectionSimulator {
    scenarios: Vec<RejectionScenario>,
    current: Option<String>,
    last_result: Option<PracticeResult>,
}

impl Default for RejectionSimulator {
    fn default() -> Self {
        Self::new(seed::rejection_scenarios())
    }
}

impl RejectionSimulator {
    pub fn new(scenarios: Vec<RejectionScenario>) -> Self {
        Self {
            scenarios,
            current: None,
            last_result: None,
        }
    }

    pub fn available(&self) -> Vec<&RejectionScenario> {
        self.scenarios.iter().filter(|s| !s.completed).collect()
    }

    pub fn completed(&self) -> Vec<&RejectionScenario> {
        self.scenarios.iter().filter(|s| s.completed).collect()
    }

    pub fn current(&self) -> Option<&RejectionScenario> {
        let id = self.current.as_deref()?;
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn last_result(&self) -> Option<&PracticeResult> {
        self.last_result.as_ref()
    }

    /// Open a scenario, clearing any previous answer.
    pub fn start(&mut self, scenario_id: &str) -> Result<&RejectionScenario, BlitzError> {
        let scenario = self
            .scenarios
            .iter()
            .find(|s| s.id == scenario_id)
            .ok_or_else(|| BlitzError::NotFound(format!("scenario {}", scenario_id)))?;
        debug!("Practice scenario {} started", scenario.id);
        self.current = Some(scenario.id.clone());
        self.last_result = None;
        Ok(scenario)
    }

    /// Evaluate an answer to the open scenario. Returns `None` with no open
    /// scenario or a blank answer.
    pub fn submit_response(&mut self, response: &str) -> Option<PracticeResult> {
        let id = self.current.clone()?;
        let (score, feedback) = score_response(response)?;
        debug!("Practice answer for {}: {}", id, escape_log(response));

        if let Some(scenario) = self.scenarios.iter_mut().find(|s| s.id == id) {
            scenario.completed = true;
            scenario.score = Some(score);
            scenario.completed_at = Some(Utc::now());
        }
        info!("Practice scenario {} scored {}", id, score);

        let result = PracticeResult {
            scenario_id: id,
            score,
            feedback,
        };
        self.last_result = Some(result.clone());
        Some(result)
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.last_result = None;
    }

    /// Rounded mean score of completed scenarios, 0 when none.
    pub fn average_score(&self) -> u32 {
        let completed = self.completed();
        if completed.is_empty() {
            return 0;
        }
        let total: u32 = completed.iter().map(|s| s.score.unwrap_or(0)).sum();
        (f64::from(total) / completed.len() as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_not_scored() {
        assert_eq!(score_response(""), None);
        assert_eq!(score_response("   \n"), None);
    }

    #[test]
    fn test_short_answer_floor() {
        let (score, feedback) = score_response("ok").unwrap();
        assert_eq!(score, 20);
        assert!(feedback.starts_with("Resposta adequada"));
    }

    #[test]
    fn test_keyword_bonus() {
        let (score, _) = score_response("Veja o VALOR").unwrap();
        assert_eq!(score, 40);
        let (score, _) = score_response("uma solução").unwrap();
        assert_eq!(score, 40);
    }

    #[test]
    fn test_long_answer_bonus() {
        let answer = "a".repeat(120);
        let (score, feedback) = score_response(&answer).unwrap();
        assert_eq!(score, 70);
        assert!(feedback.starts_with("Boa resposta"));

        let answer = format!("{} valor", "b".repeat(200));
        let (score, feedback) = score_response(&answer).unwrap();
        assert_eq!(score, 130);
        assert!(feedback.starts_with("Excelente"));
    }

    #[test]
    fn test_feedback_uses_unrounded_score() {
        // 139 units: 69.5 + 10 = 79.5
        let (score, feedback) = score_response(&"f".repeat(139)).unwrap();
        assert_eq!(score, 80);
        assert!(feedback.starts_with("Boa resposta"));

        // 79 units with a keyword: 39.5 + 20 = 59.5
        let answer = format!("valor{}", "e".repeat(74));
        let (score, feedback) = score_response(&answer).unwrap();
        assert_eq!(score, 60);
        assert!(feedback.starts_with("Resposta adequada"));
    }

    #[test]
    fn test_simulator_flow() {
        let mut sim = RejectionSimulator::default();
        assert_eq!(sim.available().len(), 3);
        assert!(sim.submit_response("sem cenário").is_none());

        sim.start("1").unwrap();
        assert!(sim.submit_response("  ").is_none());
        let result = sim.submit_response("Vamos falar do valor").unwrap();
        assert_eq!(result.score, 40);
        assert_eq!(result.toast(), "Você obteve 40 pontos neste cenário.");
        assert_eq!(sim.completed().len(), 1);
        assert_eq!(sim.average_score(), 40);

        sim.reset();
        assert!(sim.current().is_none());
        assert!(sim.last_result().is_none());
        assert!(sim.start("42").is_err());
    }
}
