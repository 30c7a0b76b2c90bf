pub mod config;
pub mod database;
pub mod db_error;
pub mod storage;
pub mod timestamps;
