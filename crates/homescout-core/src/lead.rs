//! Lead — a captured contact-form submission awaiting human follow-up.
//!
//! The wire shape ([`LeadSubmission`]) is looser than the persisted
//! [`Lead`]: enumerated fields arrive as free strings and are parsed
//! during validation so a bad value is a field error, not a
//! deserialization failure. All validation rules run independently and
//! every error is collected.

use std::{fmt, str::FromStr, sync::LazyLock};

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// ─── Enumerated fields ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadType {
  Buyer,
  Seller,
  AgentSearch,
}

impl LeadType {
  pub const ALL: [LeadType; 3] =
    [LeadType::Buyer, LeadType::Seller, LeadType::AgentSearch];

  pub fn as_str(self) -> &'static str {
    match self {
      LeadType::Buyer => "buyer",
      LeadType::Seller => "seller",
      LeadType::AgentSearch => "agent-search",
    }
  }
}

impl FromStr for LeadType {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, ()> {
    match s {
      "buyer" => Ok(LeadType::Buyer),
      "seller" => Ok(LeadType::Seller),
      "agent-search" => Ok(LeadType::AgentSearch),
      _ => Err(()),
    }
  }
}

impl fmt::Display for LeadType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
  Standard,
  Soon,
  Urgent,
}

impl FromStr for Urgency {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, ()> {
    match s {
      "standard" => Ok(Urgency::Standard),
      "soon" => Ok(Urgency::Soon),
      "urgent" => Ok(Urgency::Urgent),
      _ => Err(()),
    }
  }
}

/// Follow-up pipeline state. Server-assigned; every new lead starts at
/// `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
  New,
  Contacted,
  Qualified,
  Converted,
  Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
  Website,
  HeroForm,
  ContactForm,
  Other,
}

impl FromStr for LeadSource {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, ()> {
    match s {
      "website" => Ok(LeadSource::Website),
      "hero-form" => Ok(LeadSource::HeroForm),
      "contact-form" => Ok(LeadSource::ContactForm),
      "other" => Ok(LeadSource::Other),
      _ => Err(()),
    }
  }
}

// ─── Wire shape ──────────────────────────────────────────────────────────────

/// A lead as submitted by a form. Everything enumerated is a plain
/// string here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadSubmission {
  pub name:          Option<String>,
  pub email:         Option<String>,
  pub phone:         Option<String>,
  pub area:          Option<String>,
  #[serde(rename = "type")]
  pub lead_type:     Option<String>,
  pub property_type: Option<String>,
  pub urgency:       Option<String>,
  pub specialty:     Option<String>,
  pub message:       Option<String>,
  pub source:        Option<String>,
}

/// One failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:   String,
  pub message: String,
}

impl FieldError {
  fn new(field: &str, message: impl Into<String>) -> Self {
    Self { field: field.to_string(), message: message.into() }
  }
}

// ─── Persisted lead ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
  pub lead_id:       Uuid,
  pub name:          String,
  pub email:         String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:         Option<String>,
  pub area:          String,
  #[serde(rename = "type")]
  pub lead_type:     LeadType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub property_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub urgency:       Option<Urgency>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub specialty:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub message:       Option<String>,
  pub status:        LeadStatus,
  pub source:        LeadSource,
  pub created_at:    DateTime<Utc>,
}

impl Lead {
  /// Validate a submission and build the persistable lead.
  ///
  /// `default_area` backfills a missing `area` (some entry points omit
  /// it and mean the brokerage's home city); a missing `type` defaults
  /// to agent-search. On failure, every violated rule is returned.
  pub fn from_submission(
    submission:   &LeadSubmission,
    default_area: &str,
    now:          DateTime<Utc>,
  ) -> Result<Lead, Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();

    let name = submission.name.as_deref().unwrap_or("").trim().to_string();
    if name.len() < 2 {
      errors.push(FieldError::new(
        "name",
        "Name is required and must be at least 2 characters",
      ));
    }

    let email = submission.email.as_deref().unwrap_or("").to_string();
    if email.is_empty() {
      errors.push(FieldError::new("email", "Email is required"));
    } else if !EMAIL_RE.is_match(&email) {
      errors.push(FieldError::new("email", "Invalid email format"));
    }

    let area = match submission.area.as_deref().map(str::trim) {
      Some(a) if !a.is_empty() => a.to_string(),
      _ => default_area.to_string(),
    };
    if area.trim().len() < 2 {
      errors.push(FieldError::new(
        "area",
        "Area is required and must be at least 2 characters",
      ));
    }

    let lead_type = match submission.lead_type.as_deref() {
      None => Some(LeadType::AgentSearch),
      Some(raw) => match raw.parse::<LeadType>() {
        Ok(t) => Some(t),
        Err(()) => {
          let allowed: Vec<&str> =
            LeadType::ALL.iter().map(|t| t.as_str()).collect();
          errors.push(FieldError::new(
            "type",
            format!("Type must be one of: {}", allowed.join(", ")),
          ));
          None
        }
      },
    };

    let urgency = match submission.urgency.as_deref() {
      None => None,
      Some(raw) => match raw.parse::<Urgency>() {
        Ok(u) => Some(u),
        Err(()) => {
          errors.push(FieldError::new(
            "urgency",
            "Urgency must be one of: standard, soon, urgent",
          ));
          None
        }
      },
    };

    // Unknown sources degrade to the website default rather than
    // failing the lead.
    let source = submission
      .source
      .as_deref()
      .and_then(|s| s.parse::<LeadSource>().ok())
      .unwrap_or(LeadSource::Website);

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(Lead {
      lead_id: Uuid::new_v4(),
      name,
      email,
      phone: submission.phone.clone(),
      area,
      lead_type: lead_type.expect("validated"),
      property_type: submission.property_type.clone(),
      urgency,
      specialty: submission.specialty.clone(),
      message: submission.message.clone(),
      status: LeadStatus::New,
      source,
      created_at: now,
    })
  }
}

/// Run the validation rules without building a lead.
pub fn validate_lead(
  submission:   &LeadSubmission,
  default_area: &str,
) -> Result<(), Vec<FieldError>> {
  Lead::from_submission(submission, default_area, Utc::now()).map(|_| ())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn submission() -> LeadSubmission {
    LeadSubmission {
      name:      Some("Al Kay".into()),
      email:     Some("a@b.co".into()),
      area:      Some("Toronto".into()),
      lead_type: Some("buyer".into()),
      ..LeadSubmission::default()
    }
  }

  #[test]
  fn valid_submission_passes() {
    let lead =
      Lead::from_submission(&submission(), "Toronto", Utc::now()).unwrap();
    assert_eq!(lead.name, "Al Kay");
    assert_eq!(lead.lead_type, LeadType::Buyer);
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.source, LeadSource::Website);
  }

  #[test]
  fn short_name_and_bad_email_are_both_reported() {
    let sub = LeadSubmission {
      name:  Some("A".into()),
      email: Some("bad".into()),
      ..submission()
    };
    let errors = validate_lead(&sub, "Toronto").unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"name"), "{errors:?}");
    assert!(fields.contains(&"email"), "{errors:?}");
  }

  #[test]
  fn whitespace_name_is_rejected() {
    let sub = LeadSubmission { name: Some("  B  ".into()), ..submission() };
    assert!(validate_lead(&sub, "Toronto").is_err());
  }

  #[test]
  fn unknown_type_is_a_field_error() {
    let sub = LeadSubmission { lead_type: Some("invest".into()), ..submission() };
    let errors = validate_lead(&sub, "Toronto").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "type");
  }

  #[test]
  fn missing_type_defaults_to_agent_search() {
    let sub = LeadSubmission { lead_type: None, ..submission() };
    let lead = Lead::from_submission(&sub, "Toronto", Utc::now()).unwrap();
    assert_eq!(lead.lead_type, LeadType::AgentSearch);
  }

  #[test]
  fn missing_area_backfills_default() {
    let sub = LeadSubmission { area: None, ..submission() };
    let lead = Lead::from_submission(&sub, "Toronto", Utc::now()).unwrap();
    assert_eq!(lead.area, "Toronto");
  }

  #[test]
  fn bad_urgency_is_a_field_error() {
    let sub = LeadSubmission { urgency: Some("yesterday".into()), ..submission() };
    let errors = validate_lead(&sub, "Toronto").unwrap_err();
    assert_eq!(errors[0].field, "urgency");

    let sub = LeadSubmission { urgency: Some("urgent".into()), ..submission() };
    let lead = Lead::from_submission(&sub, "Toronto", Utc::now()).unwrap();
    assert_eq!(lead.urgency, Some(Urgency::Urgent));
  }

  #[test]
  fn unknown_source_degrades_to_website() {
    let sub = LeadSubmission { source: Some("billboard".into()), ..submission() };
    let lead = Lead::from_submission(&sub, "Toronto", Utc::now()).unwrap();
    assert_eq!(lead.source, LeadSource::Website);
  }
}
