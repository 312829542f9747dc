pub mod auth;
pub mod classroom;
pub mod course;
pub mod enroll;
pub mod grade;
pub mod nav;
pub mod student;
pub mod transcript;
pub mod user;
