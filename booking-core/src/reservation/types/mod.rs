mod action;
mod action_type;
mod receipt;
mod slot;

pub use action::*;
pub use action_type::*;
pub use receipt::*;
pub use slot::*;
