pub mod state;
pub mod student;
