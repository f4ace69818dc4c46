pub mod admin_code_service;
pub mod ticket_service;

pub use admin_code_service::*;
pub use ticket_service::*;
