//! Question-by-question input wizard producing [`FormData`].
//!
//! The wizard is a linear state machine: `Hero` (not started), then one
//! `Collecting` step per question, then `Complete`. Generation, preview and
//! export belong to the surrounding application; after a failed generation it
//! calls [`Wizard::reopen`] to put the user back on the last question.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::form::{FieldId, FormData, Tone, UnknownTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SingleLine,
    MultiLine,
    SingleChoice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: FieldId,
    pub prompt: &'static str,
    pub placeholder: Option<&'static str>,
    pub kind: InputKind,
    /// Ordered (value, label) pairs; empty unless `kind` is `SingleChoice`
    pub options: Vec<(&'static str, &'static str)>,
}

/// The seven questions, in the order they are asked
pub fn questions() -> Vec<Question> {
    let text = |id: FieldId, prompt: &'static str, placeholder: &'static str, kind: InputKind| Question {
        id,
        prompt,
        placeholder: Some(placeholder),
        kind,
        options: Vec::new(),
    };

    vec![
        text(
            FieldId::BusinessName,
            "What's your business name?",
            "e.g., Acme Construction",
            InputKind::SingleLine,
        ),
        text(
            FieldId::Industry,
            "What industry are you in?",
            "e.g., Home building, Plumbing, Electrical",
            InputKind::SingleLine,
        ),
        text(
            FieldId::TargetAudience,
            "Who are your ideal customers?",
            "e.g., Homeowners in Auckland looking to renovate",
            InputKind::SingleLine,
        ),
        text(
            FieldId::ProblemSolved,
            "What problem do you solve for them?",
            "e.g., We turn outdated homes into modern dream spaces",
            InputKind::MultiLine,
        ),
        text(
            FieldId::KeyBenefits,
            "What are 2-3 things that make you different?",
            "e.g., 15 years experience, Fixed-price quotes, 5-star reviews",
            InputKind::MultiLine,
        ),
        text(
            FieldId::CallToAction,
            "What do you want visitors to do?",
            "e.g., Get a free quote, Book a consultation, Call now",
            InputKind::SingleLine,
        ),
        Question {
            id: FieldId::Tone,
            prompt: "What tone fits your brand?",
            placeholder: None,
            kind: InputKind::SingleChoice,
            options: Tone::ALL.iter().map(|t| (t.as_str(), t.label())).collect(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hero,
    Collecting(usize),
    Complete,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("an answer is required for '{field}'")]
    InputIncomplete { field: FieldId },
    #[error("the wizard has not been completed")]
    NotComplete,
    #[error("'{value}' is not one of the choices for '{field}'")]
    InvalidChoice { field: FieldId, value: String },
}

#[derive(Debug, Clone)]
pub struct Wizard {
    questions: Vec<Question>,
    phase: Phase,
    answers: BTreeMap<FieldId, String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            questions: questions(),
            phase: Phase::Hero,
            answers: default_answers(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Collecting(i) => self.questions.get(i),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<&str> {
        let q = self.current_question()?;
        self.answers.get(&q.id).map(String::as_str)
    }

    pub fn answer_for(&self, field: FieldId) -> &str {
        self.answers.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Hero {
            self.phase = Phase::Collecting(0);
        }
    }

    /// Record `text` for the current question without advancing
    pub fn answer(&mut self, text: impl Into<String>) {
        if let Some(id) = self.current_question().map(|q| q.id) {
            self.answers.insert(id, text.into());
        }
    }

    pub fn can_continue(&self) -> bool {
        self.current_answer()
            .is_some_and(|a| !a.trim().is_empty())
    }

    /// Advance to the next question, or to `Complete` from the last one.
    /// A choice question only accepts one of its option values.
    pub fn next(&mut self) -> Result<Phase, WizardError> {
        let Phase::Collecting(index) = self.phase else {
            return Ok(self.phase);
        };
        let question = &self.questions[index];
        if !self.can_continue() {
            return Err(WizardError::InputIncomplete { field: question.id });
        }
        if question.kind == InputKind::SingleChoice {
            let value = self.answer_for(question.id);
            if !question.options.iter().any(|(option, _)| *option == value) {
                return Err(WizardError::InvalidChoice {
                    field: question.id,
                    value: value.to_string(),
                });
            }
        }
        self.phase = if index + 1 < self.questions.len() {
            Phase::Collecting(index + 1)
        } else {
            Phase::Complete
        };
        Ok(self.phase)
    }

    pub fn back(&mut self) {
        if let Phase::Collecting(index) = self.phase {
            self.phase = Phase::Collecting(index.saturating_sub(1));
        }
    }

    /// Discard all answers and return to the hero screen
    pub fn reset(&mut self) {
        self.phase = Phase::Hero;
        self.answers = default_answers();
    }

    /// Return from `Complete` to the last question, keeping every answer
    pub fn reopen(&mut self) {
        if self.phase == Phase::Complete {
            self.phase = Phase::Collecting(self.questions.len() - 1);
        }
    }

    /// Completion percentage, `(index + 1) / N * 100`
    pub fn progress(&self) -> f64 {
        let total = self.questions.len() as f64;
        match self.phase {
            Phase::Hero => 0.0,
            Phase::Collecting(i) => (i as f64 + 1.0) / total * 100.0,
            Phase::Complete => 100.0,
        }
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress().round() as u8
    }

    pub fn form_data(&self) -> Result<FormData, WizardError> {
        if self.phase != Phase::Complete {
            return Err(WizardError::NotComplete);
        }
        let get = |field| self.answer_for(field).to_string();
        Ok(FormData {
            business_name: get(FieldId::BusinessName),
            industry: get(FieldId::Industry),
            target_audience: get(FieldId::TargetAudience),
            problem_solved: get(FieldId::ProblemSolved),
            key_benefits: get(FieldId::KeyBenefits),
            call_to_action: get(FieldId::CallToAction),
            tone: self
                .answer_for(FieldId::Tone)
                .parse()
                .map_err(|UnknownTone(value)| WizardError::InvalidChoice {
                    field: FieldId::Tone,
                    value,
                })?,
        })
    }
}

fn default_answers() -> BTreeMap<FieldId, String> {
    FieldId::ALL
        .iter()
        .map(|&id| {
            let default = match id {
                FieldId::Tone => Tone::default().as_str().to_string(),
                _ => String::new(),
            };
            (id, default)
        })
        .collect()
}
