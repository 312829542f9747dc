use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ArmsError, ArmsResult};
use crate::types::EntityId;

pub const DEFAULT_CREDIT_HOURS: i32 = 3;
pub const CREDIT_HOURS_RANGE: std::ops::RangeInclusive<i32> = 1..=12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub course_code: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default = "default_credit_hours", deserialize_with = "credit_hours_or_default")]
    pub credit_hours: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_credit_hours() -> i32 {
    DEFAULT_CREDIT_HOURS
}

fn credit_hours_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_CREDIT_HOURS))
}

impl Course {
    pub fn new(course_code: impl Into<String>, title: impl Into<String>, credit_hours: i32) -> Self {
        Self {
            id: None,
            course_code: course_code.into(),
            title: title.into(),
            credit_hours,
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    pub fn validate(&self) -> ArmsResult<()> {
        if self.course_code.trim().is_empty() || self.title.trim().is_empty() {
            return Err(ArmsError::validation("Course code and title are required"));
        }
        if !CREDIT_HOURS_RANGE.contains(&self.credit_hours) {
            return Err(ArmsError::validation(format!(
                "Credit hours must be between {} and {}",
                CREDIT_HOURS_RANGE.start(),
                CREDIT_HOURS_RANGE.end()
            )));
        }
        Ok(())
    }

    /// "CS401 - Modern Programming Practices"
    pub fn label(&self) -> String {
        format!("{} - {}", self.course_code, self.title)
    }
}

/// Partial course update; only the given fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_hours: Option<i32>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.course_code.is_none() && self.title.is_none() && self.credit_hours.is_none()
    }

    pub fn validate(&self) -> ArmsResult<()> {
        if self.is_empty() {
            return Err(ArmsError::validation("Nothing to update"));
        }
        let blank = |field: &Option<String>| field.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&self.course_code) || blank(&self.title) {
            return Err(ArmsError::validation("Course code and title cannot be blank"));
        }
        if let Some(hours) = self.credit_hours {
            if !CREDIT_HOURS_RANGE.contains(&hours) {
                return Err(ArmsError::validation(format!(
                    "Credit hours must be between {} and {}",
                    CREDIT_HOURS_RANGE.start(),
                    CREDIT_HOURS_RANGE.end()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_credit_hours_default_to_three() {
        let course: Course =
            serde_json::from_value(json!({ "id": 1, "courseCode": "CS401", "title": "MPP" })).unwrap();
        assert_eq!(course.credit_hours, DEFAULT_CREDIT_HOURS);
        assert_eq!(course.label(), "CS401 - MPP");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let course: Course = serde_json::from_value(
            json!({ "id": 2, "courseCode": "CS390", "title": null, "creditHours": null }),
        )
        .unwrap();
        assert_eq!(course.credit_hours, DEFAULT_CREDIT_HOURS);
        assert_eq!(course.title, "");
    }

    #[test]
    fn credit_hours_outside_range_are_rejected() {
        assert!(Course::new("CS401", "MPP", 4).validate().is_ok());
        assert!(Course::new("CS401", "MPP", 0).validate().is_err());
        assert!(Course::new("CS401", "MPP", 13).validate().is_err());
        assert!(Course::new(" ", "MPP", 4).validate().is_err());
    }

    #[test]
    fn patch_serializes_only_given_fields() {
        let patch = CoursePatch {
            title: Some("Algorithms".to_string()),
            ..CoursePatch::default()
        };
        assert!(patch.validate().is_ok());
        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({ "title": "Algorithms" }));
        assert!(CoursePatch::default().validate().is_err());
    }
}
