//! Answer set collected by the wizard and the page produced from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Brand voice for the generated copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Bold,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Casual, Tone::Bold];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Bold => "bold",
        }
    }

    /// Descriptive phrase handed to the generative model
    pub fn description(self) -> &'static str {
        match self {
            Tone::Professional => "trustworthy, polished, and authoritative",
            Tone::Casual => "friendly, warm, and approachable",
            Tone::Bold => "confident, energetic, and dynamic",
        }
    }

    /// Label shown next to the choice in the wizard
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional — Trustworthy and polished",
            Tone::Casual => "Casual — Friendly and approachable",
            Tone::Bold => "Bold — Confident and energetic",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tone '{0}' (expected professional, casual or bold)")]
pub struct UnknownTone(pub String);

impl FromStr for Tone {
    type Err = UnknownTone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "professional" => Ok(Tone::Professional),
            "casual" => Ok(Tone::Casual),
            "bold" => Ok(Tone::Bold),
            other => Err(UnknownTone(other.to_string())),
        }
    }
}

/// One of the seven answers making up a [`FormData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    BusinessName,
    Industry,
    TargetAudience,
    ProblemSolved,
    KeyBenefits,
    CallToAction,
    Tone,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::BusinessName,
        FieldId::Industry,
        FieldId::TargetAudience,
        FieldId::ProblemSolved,
        FieldId::KeyBenefits,
        FieldId::CallToAction,
        FieldId::Tone,
    ];

    /// Wire name (camelCase) of the field
    pub fn key(self) -> &'static str {
        match self {
            FieldId::BusinessName => "businessName",
            FieldId::Industry => "industry",
            FieldId::TargetAudience => "targetAudience",
            FieldId::ProblemSolved => "problemSolved",
            FieldId::KeyBenefits => "keyBenefits",
            FieldId::CallToAction => "callToAction",
            FieldId::Tone => "tone",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation failures for a loosely typed generate request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("request body is not valid JSON: {0}")]
    InvalidBody(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing field '{field}'")]
    MissingField { field: &'static str },
    #[error("field '{field}' must be a string")]
    WrongType { field: &'static str },
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },
    #[error("field 'tone': {0}")]
    InvalidTone(#[from] UnknownTone),
}

/// The seven-field answer set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub business_name: String,
    pub industry: String,
    pub target_audience: String,
    pub problem_solved: String,
    pub key_benefits: String,
    pub call_to_action: String,
    pub tone: Tone,
}

impl FormData {
    /// Build from an untrusted JSON payload, checking presence and type of every field.
    pub fn from_json(value: &Value) -> Result<Self, RequestError> {
        let obj = value.as_object().ok_or(RequestError::NotAnObject)?;

        let text = |field: FieldId| -> Result<String, RequestError> {
            let key = field.key();
            let raw = obj.get(key).ok_or(RequestError::MissingField { field: key })?;
            let s = raw.as_str().ok_or(RequestError::WrongType { field: key })?;
            if s.trim().is_empty() {
                return Err(RequestError::EmptyField { field: key });
            }
            Ok(s.to_string())
        };

        Ok(Self {
            business_name: text(FieldId::BusinessName)?,
            industry: text(FieldId::Industry)?,
            target_audience: text(FieldId::TargetAudience)?,
            problem_solved: text(FieldId::ProblemSolved)?,
            key_benefits: text(FieldId::KeyBenefits)?,
            call_to_action: text(FieldId::CallToAction)?,
            tone: text(FieldId::Tone)?.parse()?,
        })
    }

    /// Benefit phrases split on commas and trimmed. Empty segments are kept.
    pub fn benefits(&self) -> Vec<&str> {
        self.key_benefits.split(',').map(str::trim).collect()
    }
}

/// Generated page: body-fragment markup plus a complete stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPage {
    pub html: String,
    pub css: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "businessName": "Acme Construction",
            "industry": "Home building",
            "targetAudience": "Homeowners in Auckland",
            "problemSolved": "We turn outdated homes into modern dream spaces",
            "keyBenefits": "15 years experience, Fixed-price quotes, 5-star reviews",
            "callToAction": "Get a free quote",
            "tone": "bold"
        })
    }

    #[test]
    fn test_from_json_accepts_complete_payload() {
        let data = FormData::from_json(&payload()).unwrap();
        assert_eq!(data.business_name, "Acme Construction");
        assert_eq!(data.tone, Tone::Bold);
        assert_eq!(data.benefits().len(), 3);
    }

    #[test]
    fn test_from_json_reports_offending_field() {
        let mut missing = payload();
        missing.as_object_mut().unwrap().remove("industry");
        assert_eq!(
            FormData::from_json(&missing),
            Err(RequestError::MissingField { field: "industry" })
        );

        let mut wrong = payload();
        wrong["callToAction"] = json!(42);
        assert_eq!(
            FormData::from_json(&wrong),
            Err(RequestError::WrongType {
                field: "callToAction"
            })
        );

        let mut blank = payload();
        blank["keyBenefits"] = json!("   ");
        assert_eq!(
            FormData::from_json(&blank),
            Err(RequestError::EmptyField {
                field: "keyBenefits"
            })
        );

        let mut tone = payload();
        tone["tone"] = json!("sarcastic");
        assert!(matches!(
            FormData::from_json(&tone),
            Err(RequestError::InvalidTone(_))
        ));

        assert_eq!(
            FormData::from_json(&json!(["not", "an", "object"])),
            Err(RequestError::NotAnObject)
        );
    }

    #[test]
    fn test_benefits_keep_empty_segments() {
        let mut data = FormData::from_json(&payload()).unwrap();
        data.key_benefits = "Fast,, Friendly ".to_string();
        assert_eq!(data.benefits(), vec!["Fast", "", "Friendly"]);
    }

    #[test]
    fn test_tone_round_trips_through_serde() {
        let tone: Tone = serde_json::from_value(json!("casual")).unwrap();
        assert_eq!(tone, Tone::Casual);
        assert_eq!(serde_json::to_value(Tone::Bold).unwrap(), json!("bold"));
        assert!("loud".parse::<Tone>().is_err());
    }
}
