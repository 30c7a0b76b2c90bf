pub mod password_hasher;
pub mod position_repository;
pub mod profile_query;
pub mod profile_repository;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use position_repository::{CreatePositionData, PositionRepository, PositionRepositoryError};
pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use profile_repository::{ProfileData, ProfileRepository, ProfileRepositoryError};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{CreateUserData, UpdateUserData, UserRepository, UserRepositoryError};
