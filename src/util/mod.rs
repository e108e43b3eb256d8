pub mod human;
pub mod report;
pub mod user_state;
