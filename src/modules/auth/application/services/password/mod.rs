mod basic_password_policy;

pub use basic_password_policy::{is_validate_password, BasicPasswordPolicy};
