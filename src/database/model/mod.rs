pub mod club;
pub mod student;
