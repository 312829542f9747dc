pub mod classroom;
pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod user;

pub use classroom::{Classroom, ClassroomMembership};
pub use course::{Course, CoursePatch};
pub use enrollment::{created_enrollments, BulkCoursesEnrollment, BulkStudentsEnrollment, Enrollment};
pub use grade::GradeSubmission;
pub use student::{AcademicLevel, Gender, Student, StudentStatus};
pub use user::{NewUser, User};

/// An explicit `null` from the backend reads the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Transcripts are rendered as the backend sends them
pub type Transcript = serde_json::Value;
