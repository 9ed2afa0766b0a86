//! Domain model

mod student;

pub use student::Student;
