use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Student-in-classroom membership returned by the start action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomMembership {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub classroom_id: Option<EntityId>,
    #[serde(default)]
    pub student_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClassroomMembership {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}
