use serde_json::Value;

use super::gateway::{ApiGateway, RequestOptions};
use crate::error::ArmsResult;
use crate::models::{
    BulkCoursesEnrollment, BulkStudentsEnrollment, Classroom, ClassroomMembership, Course,
    CoursePatch, Student,
};
use crate::types::EntityId;

/// `/registrar/*` endpoints: students, courses, enrollments and classrooms
#[derive(Clone)]
pub struct RegistrarApi {
    gateway: ApiGateway,
}

impl RegistrarApi {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    // Students

    pub async fn list_students(&self, token: &str) -> ArmsResult<Vec<Student>> {
        self.gateway
            .fetch("/registrar/students", RequestOptions::get(), Some(token))
            .await
    }

    pub async fn get_student(&self, id: EntityId, token: &str) -> ArmsResult<Student> {
        self.gateway
            .fetch(&format!("/registrar/students/{}", id), RequestOptions::get(), Some(token))
            .await
    }

    pub async fn create_student(&self, student: &Student, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send("/registrar/students", RequestOptions::post(student)?, Some(token))
            .await
    }

    pub async fn update_student(&self, id: EntityId, student: &Student, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                &format!("/registrar/students/{}", id),
                RequestOptions::patch(student)?,
                Some(token),
            )
            .await
    }

    /// Soft delete; the record can be restored by the backend
    pub async fn delete_student(&self, id: EntityId, token: &str) -> ArmsResult<()> {
        self.gateway
            .request(&format!("/registrar/students/{}", id), RequestOptions::delete(), Some(token))
            .await
            .map(|_| ())
    }

    /// Permanent delete
    pub async fn hard_delete_student(&self, id: EntityId, token: &str) -> ArmsResult<()> {
        self.gateway
            .request(
                &format!("/registrar/students/{}/hard", id),
                RequestOptions::delete(),
                Some(token),
            )
            .await
            .map(|_| ())
    }

    // Courses

    pub async fn list_courses(&self, token: &str) -> ArmsResult<Vec<Course>> {
        self.gateway
            .fetch("/registrar/courses", RequestOptions::get(), Some(token))
            .await
    }

    pub async fn create_course(&self, course: &Course, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send("/registrar/courses", RequestOptions::post(course)?, Some(token))
            .await
    }

    pub async fn update_course(&self, id: EntityId, patch: &CoursePatch, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                &format!("/registrar/courses/{}", id),
                RequestOptions::patch(patch)?,
                Some(token),
            )
            .await
    }

    pub async fn delete_course(&self, id: EntityId, token: &str) -> ArmsResult<()> {
        self.gateway
            .request(&format!("/registrar/courses/{}", id), RequestOptions::delete(), Some(token))
            .await
            .map(|_| ())
    }

    // Enrollments

    /// One student into many courses
    pub async fn bulk_enroll_courses(&self, request: &BulkCoursesEnrollment, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send("/registrar/enrollments/bulk", RequestOptions::post(request)?, Some(token))
            .await
    }

    /// Many students into one course
    pub async fn bulk_enroll_students(&self, request: &BulkStudentsEnrollment, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                "/registrar/enrollments/bulk-students",
                RequestOptions::post(request)?,
                Some(token),
            )
            .await
    }

    // Classrooms

    pub async fn list_classrooms(&self, token: &str) -> ArmsResult<Vec<Classroom>> {
        self.gateway
            .fetch("/registrar/classrooms", RequestOptions::get(), Some(token))
            .await
    }

    pub async fn create_classroom(&self, classroom: &Value, token: &str) -> ArmsResult<Value> {
        // Creation lives on the singular path
        self.gateway
            .send("/registrar/classroom", RequestOptions::post(classroom)?, Some(token))
            .await
    }

    pub async fn start_classroom_membership(
        &self,
        classroom_id: EntityId,
        student_id: EntityId,
        token: &str,
    ) -> ArmsResult<ClassroomMembership> {
        self.gateway
            .fetch(
                &format!("/registrar/classrooms/{}/students/{}/start", classroom_id, student_id),
                RequestOptions::post_empty(),
                Some(token),
            )
            .await
    }

    pub async fn end_classroom_membership(&self, membership_id: EntityId, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send(
                &format!("/registrar/classrooms/memberships/{}/end", membership_id),
                RequestOptions::post_empty(),
                Some(token),
            )
            .await
    }

    pub async fn assign_classroom(&self, assignment: &Value, token: &str) -> ArmsResult<Value> {
        self.gateway
            .send("/registrar/classrooms/assign", RequestOptions::post(assignment)?, Some(token))
            .await
    }
}
