pub mod messages;
pub mod types;
