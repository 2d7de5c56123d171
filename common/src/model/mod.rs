pub mod field;
pub mod photo;
pub mod registration;
pub mod student;
