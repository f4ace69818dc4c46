pub mod admin_codes;
pub mod tickets;

pub use admin_codes as admin_code_entity;
pub use tickets as ticket_entity;
