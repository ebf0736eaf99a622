use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use petdor_core::models::score::ScoreResult;

use crate::error::ProfileError;
use crate::scale::Scale;
use crate::scoring::round_to_tenth;

/// A single assessment item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub scale: Scale,
    /// Positively phrased ("was playful"): a low answer means more pain.
    #[serde(default)]
    pub inverted: bool,
    /// Contribution multiplier. Zero marks an informational question that
    /// takes no part in scoring.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, scale: Scale) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            scale,
            inverted: false,
            weight: default_weight(),
            category_id: None,
        }
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn in_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// The raw answer oriented so that higher always means more pain.
    pub fn effective_value(&self, raw: i32) -> i32 {
        if self.inverted {
            self.scale.reflect(raw)
        } else {
            raw
        }
    }
}

/// Named cluster of questions, for presentation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Lower threshold of a named pain level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PainBand {
    pub min_percentage: f64,
    pub label: String,
}

impl PainBand {
    pub fn new(min_percentage: f64, label: impl Into<String>) -> Self {
        Self {
            min_percentage,
            label: label.into(),
        }
    }
}

/// Low / medium / high bands for 0–7 questionnaires: 0–2 is low, 3–5 is
/// medium and 6–7 is high, expressed as percentages of the scale.
pub fn default_pain_bands() -> Vec<PainBand> {
    let point = 100.0 / 7.0;
    vec![
        PainBand::new(0.0, "Baixa"),
        PainBand::new(round_to_tenth(3.0 * point), "Média"),
        PainBand::new(round_to_tenth(6.0 * point), "Alta"),
    ]
}

/// A species' complete assessment definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeciesProfile {
    pub species_id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// `false` marks a placeholder for a species whose questionnaire is not
    /// implemented yet.
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    /// Presentation labels for each answer value, lowest first.
    #[serde(default)]
    pub answer_labels: Vec<String>,
    /// Ascending thresholds used by [`SpeciesProfile::classify`].
    #[serde(default)]
    pub pain_bands: Vec<PainBand>,
}

fn default_available() -> bool {
    true
}

impl SpeciesProfile {
    pub fn new(species_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            species_id: species_id.into(),
            display_name: display_name.into(),
            description: String::new(),
            available: true,
            categories: Vec::new(),
            questions: Vec::new(),
            answer_labels: Vec::new(),
            pain_bands: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Declare a category and append its questions, tagging each with the
    /// category id.
    pub fn with_category(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let id = id.into();
        self.questions
            .extend(questions.into_iter().map(|q| q.in_category(id.clone())));
        self.categories.push(Category {
            id,
            name: name.into(),
        });
        self
    }

    pub fn with_answer_labels(mut self, labels: Vec<String>) -> Self {
        self.answer_labels = labels;
        self
    }

    pub fn with_pain_bands(mut self, bands: Vec<PainBand>) -> Self {
        self.pain_bands = bands;
        self
    }

    /// Scoring questions on a scale that does not start at zero. Their
    /// percentages cannot reach 0% and were never produced by the legacy
    /// 0-based formula, so they need a manual look before going live.
    pub fn needs_migration_review(&self) -> bool {
        self.questions
            .iter()
            .any(|q| q.weight > 0.0 && !q.scale.is_zero_based())
    }

    /// Questions grouped for display: declared categories first (in
    /// declaration order, empty ones skipped), then any uncategorised
    /// questions under `None`.
    pub fn grouped(&self) -> Vec<(Option<&Category>, Vec<&Question>)> {
        let mut groups = Vec::new();
        for category in &self.categories {
            let questions: Vec<&Question> = self
                .questions
                .iter()
                .filter(|q| q.category_id.as_deref() == Some(category.id.as_str()))
                .collect();
            if !questions.is_empty() {
                groups.push((Some(category), questions));
            }
        }

        let loose: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.category_id.is_none())
            .collect();
        if !loose.is_empty() {
            groups.push((None, loose));
        }
        groups
    }

    /// The pain band a score falls into. Degenerate scores are never
    /// classified.
    pub fn classify(&self, result: &ScoreResult) -> Option<&PainBand> {
        if result.degenerate {
            return None;
        }
        self.pain_bands
            .iter()
            .rev()
            .find(|band| result.percentage >= band.min_percentage)
    }

    /// Check the invariants a profile must hold before it can be registered.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.species_id.trim().is_empty() {
            return Err(ProfileError::MissingSpeciesId);
        }
        if self.display_name.trim().is_empty() {
            return Err(ProfileError::MissingDisplayName);
        }
        if self.questions.is_empty() && self.available {
            return Err(ProfileError::NoQuestions);
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(ProfileError::DuplicateCategoryId(category.id.clone()));
            }
        }

        let mut question_ids = HashSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(ProfileError::EmptyQuestionId { index });
            }
            if !question_ids.insert(question.id.as_str()) {
                return Err(ProfileError::DuplicateQuestionId(question.id.clone()));
            }
            if !question.weight.is_finite() || question.weight < 0.0 {
                return Err(ProfileError::InvalidWeight {
                    question_id: question.id.clone(),
                    weight: question.weight,
                });
            }
            question
                .scale
                .validate()
                .map_err(|source| ProfileError::InvalidScale {
                    question_id: question.id.clone(),
                    source,
                })?;
            if let Some(category_id) = &question.category_id
                && !category_ids.contains(category_id.as_str())
            {
                return Err(ProfileError::UnknownCategory {
                    question_id: question.id.clone(),
                    category_id: category_id.clone(),
                });
            }
        }

        let max_possible: f64 = self
            .questions
            .iter()
            .map(|q| f64::from(q.scale.high) * q.weight)
            .sum();
        if !max_possible.is_finite() {
            return Err(ProfileError::UnboundedMaximum);
        }

        let mut previous: Option<f64> = None;
        for band in &self.pain_bands {
            let in_range = (0.0..=100.0).contains(&band.min_percentage);
            let ascending = previous.is_none_or(|p| band.min_percentage > p);
            if !in_range || !ascending {
                return Err(ProfileError::InvalidPainBand {
                    label: band.label.clone(),
                    min_percentage: band.min_percentage,
                });
            }
            previous = Some(band.min_percentage);
        }

        Ok(())
    }
}
