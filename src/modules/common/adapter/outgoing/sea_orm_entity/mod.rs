pub mod countries;
pub mod moderation_status;
pub mod regions;
