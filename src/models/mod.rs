pub mod admin_code;
pub mod ticket;

pub use admin_code::*;
pub use ticket::*;
