pub mod change_password;
pub mod create_position;
pub mod create_profile;
pub mod create_user;
pub mod delete_user;
pub mod fetch_profile;
pub mod profile_command;
pub mod update_profile;
pub mod update_user;
pub mod verify_credentials;
