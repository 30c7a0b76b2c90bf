pub mod gender;
pub mod positions;
pub mod profiles;
pub mod users;
