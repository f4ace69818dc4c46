pub mod code_generator;
pub mod pagination;
pub mod phone;

pub use code_generator::{ADMIN_CODE_LENGTH, generate_six_digit_code};
pub use pagination::{MAX_LIST_LIMIT, clamp_limit};
pub use phone::*;
