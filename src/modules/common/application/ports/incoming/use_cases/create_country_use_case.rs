use async_trait::async_trait;

use crate::common::application::domain::entities::{Country, CountryCode};

//
// ──────────────────────────────────────────────────────────
// Create Country Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCountryCommand {
    name: String,
    code: CountryCode,
    is_active: bool,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreateCountryCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long")]
    NameTooLong,

    #[error("Country code must be exactly two ASCII letters")]
    InvalidCode,
}

impl CreateCountryCommand {
    pub fn new(
        name: String,
        code: &str,
        is_active: Option<bool>,
    ) -> Result<Self, CreateCountryCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateCountryCommandError::EmptyName);
        }

        if name.chars().count() > 255 {
            return Err(CreateCountryCommandError::NameTooLong);
        }

        let code = CountryCode::new(code).map_err(|_| CreateCountryCommandError::InvalidCode)?;

        Ok(Self {
            name: name.to_string(),
            code,
            is_active: is_active.unwrap_or(true),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCountryError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCountryUseCase: Send + Sync {
    async fn execute(&self, command: CreateCountryCommand) -> Result<Country, CreateCountryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_trims_name_and_defaults_to_active() {
        let command = CreateCountryCommand::new("  Uzbekistan ".to_string(), "uz", None).unwrap();

        assert_eq!(command.name(), "Uzbekistan");
        assert_eq!(command.code().as_str(), "UZ");
        assert!(command.is_active());
    }

    #[test]
    fn command_rejects_empty_name() {
        let result = CreateCountryCommand::new("   ".to_string(), "UZ", None);
        assert_eq!(result.unwrap_err(), CreateCountryCommandError::EmptyName);
    }

    #[test]
    fn command_rejects_invalid_code() {
        let result = CreateCountryCommand::new("Uzbekistan".to_string(), "UZB", Some(false));
        assert_eq!(result.unwrap_err(), CreateCountryCommandError::InvalidCode);
    }
}
