mod state_repo;
mod student_repo;

pub use state_repo::StateRepo;
pub use student_repo::StudentRepo;
