pub mod identity;
pub mod manage;
