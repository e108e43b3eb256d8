pub mod info;
pub mod raid;
