//! Case intake form rules
//!
//! Validation and case-type dependent behavior for the intake form, without any UI:
//! - `name`, `email`, `case_type`, `offense_description` and `query` are required
//!   (blank after trimming counts as missing)
//! - a non-blank email must look like `local@domain.tld`
//! - violent case types also require `victim_details`
//! - the query placeholder depends on the case type
//!
//! Errors are reported in that order: required fields, email format, victim details.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fmt;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const DEFAULT_QUERY_PLACEHOLDER: &str = "Please describe your legal query in detail...";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A submitted intake form. Absent fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub case_type: String,
    pub offense_description: String,
    pub query: String,
    pub incident_date: String,
    pub incident_location: String,
    pub victim_details: String,
    pub accused_details: String,
    pub evidence_summary: String,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    CaseType,
    OffenseDescription,
    Query,
    VictimDetails,
}

impl Field {
    /// The form field id.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::CaseType => "case_type",
            Field::OffenseDescription => "offense_description",
            Field::Query => "query",
            Field::VictimDetails => "victim_details",
        }
    }

    fn value(self, form: &IntakeForm) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Email => &form.email,
            Field::CaseType => &form.case_type,
            Field::OffenseDescription => &form.offense_description,
            Field::Query => &form.query,
            Field::VictimDetails => &form.victim_details,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const REQUIRED_FIELDS: [Field; 5] = [
    Field::Name,
    Field::Email,
    Field::CaseType,
    Field::OffenseDescription,
    Field::Query,
];

/// Case types offered by the intake form. Anything else is kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseType {
    Theft,
    Assault,
    Fraud,
    Murder,
    Rape,
    DomesticViolence,
    Cybercrime,
    Other(String),
}

impl CaseType {
    pub fn as_str(&self) -> &str {
        match self {
            CaseType::Theft => "Theft",
            CaseType::Assault => "Assault",
            CaseType::Fraud => "Fraud",
            CaseType::Murder => "Murder",
            CaseType::Rape => "Rape",
            CaseType::DomesticViolence => "Domestic Violence",
            CaseType::Cybercrime => "Cybercrime",
            CaseType::Other(name) => name.as_str(),
        }
    }

    /// Whether the form must collect victim details for this case type.
    pub fn requires_victim_details(&self) -> bool {
        matches!(
            self,
            CaseType::Assault | CaseType::Murder | CaseType::Rape | CaseType::DomesticViolence
        )
    }

    /// Example text shown in the query field.
    pub fn query_placeholder(&self) -> &'static str {
        match self {
            CaseType::Theft => "Example: I need to understand what charges can be filed for a stolen mobile phone from my shop...",
            CaseType::Assault => "Example: My neighbor attacked me during an argument and I suffered minor injuries...",
            CaseType::Fraud => "Example: I paid for services that were never delivered despite multiple follow-ups...",
            CaseType::Murder => "Example: I need to understand the legal implications in a case where someone was killed during a fight...",
            CaseType::Rape => "Example: I need to understand the legal process for reporting a sexual assault case...",
            CaseType::DomesticViolence => "Example: I am suffering abuse from my spouse and need to know my legal options...",
            CaseType::Cybercrime => "Example: Someone is using my pictures online without permission and harassing me...",
            CaseType::Other(_) => DEFAULT_QUERY_PLACEHOLDER,
        }
    }
}

impl From<&str> for CaseType {
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "Theft" => CaseType::Theft,
            "Assault" => CaseType::Assault,
            "Fraud" => CaseType::Fraud,
            "Murder" => CaseType::Murder,
            "Rape" => CaseType::Rape,
            "Domestic Violence" => CaseType::DomesticViolence,
            "Cybercrime" => CaseType::Cybercrime,
            other => CaseType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placeholder for the query field given the raw case type selection.
pub fn query_placeholder(case_type: &str) -> &'static str {
    CaseType::from(case_type).query_placeholder()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error the form should scroll to.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }
}

/// Validate a submitted form.
pub fn validate(form: &IntakeForm) -> ValidationReport {
    let mut errors: Vec<FieldError> = REQUIRED_FIELDS
        .iter()
        .filter(|field| field.value(form).trim().is_empty())
        .map(|&field| FieldError {
            field,
            message: REQUIRED_MESSAGE,
        })
        .collect();

    let email = form.email.trim();
    if !email.is_empty() && !EMAIL.is_match(email) {
        errors.push(FieldError {
            field: Field::Email,
            message: INVALID_EMAIL_MESSAGE,
        });
    }

    if CaseType::from(form.case_type.as_str()).requires_victim_details()
        && form.victim_details.trim().is_empty()
    {
        errors.push(FieldError {
            field: Field::VictimDetails,
            message: REQUIRED_MESSAGE,
        });
    }

    ValidationReport { errors }
}
