pub mod phone_number_guard;

pub use phone_number_guard::{PhoneNumberGuard, PhoneNumberGuardError};
