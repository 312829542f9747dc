use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{ArmsError, ArmsResult};
use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    Active,
    Inactive,
    Graduated,
    Suspended,
    Withdrawn,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicLevel {
    Undergrad,
    Grad,
    Doctoral,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub student_number: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<AcademicLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_enrollment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_graduation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_for_exit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
    /// Backend fields this client does not edit, preserved for round trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Student {
    pub fn full_name(&self) -> String {
        [Some(self.first_name.as_str()), self.middle_name.as_deref(), Some(self.last_name.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Required-field checks performed before a create or update is sent
    pub fn validate(&self) -> ArmsResult<()> {
        let mut missing = Vec::new();
        for (field, value) in [
            ("studentNumber", self.student_number.as_str()),
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("program", self.program.as_deref().unwrap_or("")),
            ("dateOfEnrollment", self.date_of_enrollment.as_deref().unwrap_or("")),
        ] {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        if self.level.is_none() {
            missing.push("level");
        }
        if self.status.is_none() {
            missing.push("status");
        }
        if !missing.is_empty() {
            return Err(ArmsError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        if !self.email.contains('@') {
            return Err(ArmsError::validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }

        Ok(())
    }
}

impl StudentStatus {
    pub const ALL: [StudentStatus; 5] = [
        StudentStatus::Active,
        StudentStatus::Inactive,
        StudentStatus::Graduated,
        StudentStatus::Suspended,
        StudentStatus::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Active => "ACTIVE",
            StudentStatus::Inactive => "INACTIVE",
            StudentStatus::Graduated => "GRADUATED",
            StudentStatus::Suspended => "SUSPENDED",
            StudentStatus::Withdrawn => "WITHDRAWN",
            StudentStatus::Unknown => "UNKNOWN",
        }
    }

    /// Statuses for which the exit reason is collected
    pub fn records_exit_reason(&self) -> bool {
        matches!(self, StudentStatus::Withdrawn | StudentStatus::Suspended)
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown student status '{}'", s))
    }
}

impl AcademicLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AcademicLevel::Undergrad => "Undergraduate",
            AcademicLevel::Grad => "Graduate",
            AcademicLevel::Doctoral => "Doctoral",
            AcademicLevel::Unknown => "Unknown",
        }
    }
}
