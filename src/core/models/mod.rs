//! Data models for curricula and grades

pub mod course;
pub mod curriculum;
pub mod grade;
pub mod semester;

pub use course::{Course, CourseDraft, CoursePatch, CourseType};
pub use curriculum::Curriculum;
pub use grade::Grade;
pub use semester::{ElectiveGroup, Semester};
