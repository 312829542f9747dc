use serde::Serialize;
use std::fmt;

use super::roles::Role;
use super::Session;
use crate::error::{ArmsError, ArmsResult};

/// Top-level areas of the application, each visible to a fixed set of roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Students,
    Courses,
    Enrollments,
    Grades,
    Transcripts,
    Classrooms,
    Users,
}

impl Section {
    /// Display order
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Students,
        Section::Courses,
        Section::Enrollments,
        Section::Grades,
        Section::Transcripts,
        Section::Classrooms,
        Section::Users,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Students => "students",
            Section::Courses => "courses",
            Section::Enrollments => "enrollments",
            Section::Grades => "grades",
            Section::Transcripts => "transcripts",
            Section::Classrooms => "classrooms",
            Section::Users => "users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Students => "Students",
            Section::Courses => "Courses",
            Section::Enrollments => "Enrollments",
            Section::Grades => "Grades",
            Section::Transcripts => "Transcripts",
            Section::Classrooms => "Classrooms",
            Section::Users => "User Management",
        }
    }

    pub fn roles(&self) -> &'static [Role] {
        match self {
            Section::Dashboard => &[Role::Admin, Role::Registrar, Role::Faculty, Role::Student],
            Section::Students | Section::Courses | Section::Enrollments | Section::Classrooms => {
                &[Role::Admin, Role::Registrar]
            }
            Section::Grades => &[Role::Faculty],
            Section::Transcripts => &[Role::Admin, Role::Registrar, Role::Student],
            Section::Users => &[Role::Admin],
        }
    }

    pub fn is_visible_to(&self, session: &Session) -> bool {
        session.has_any_role(self.roles())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn visible_sections(session: &Session) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| section.is_visible_to(session))
        .collect()
}

/// Refuse locally before any request is made for a hidden section
pub fn ensure_section(session: &Session, section: Section) -> ArmsResult<()> {
    if !session.is_authenticated() {
        return Err(ArmsError::Unauthenticated);
    }
    if !section.is_visible_to(session) {
        let roles: Vec<&str> = section.roles().iter().map(Role::as_str).collect();
        return Err(ArmsError::forbidden(format!(
            "{} is available to {} only",
            section.label(),
            roles.join(", ")
        )));
    }
    Ok(())
}
