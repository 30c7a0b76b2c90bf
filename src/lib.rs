pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::common;
pub use modules::course;

#[cfg(test)]
mod tests;
