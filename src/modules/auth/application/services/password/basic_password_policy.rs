use crate::auth::application::ports::incoming::password_policy::{
    PasswordPolicy, PasswordPolicyError,
};

#[derive(Debug, Clone, Copy)]
pub struct BasicPasswordPolicy {
    min_len: usize,
    max_len: usize,
}

impl BasicPasswordPolicy {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 20;

    pub fn new() -> Self {
        Self {
            min_len: Self::MIN_LEN,
            max_len: Self::MAX_LEN,
        }
    }
}

impl Default for BasicPasswordPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordPolicy for BasicPasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        if !password.is_ascii() {
            return Err(PasswordPolicyError::NonAscii);
        }

        // ASCII only from here on, so byte length equals character count
        if password.len() < self.min_len {
            return Err(PasswordPolicyError::TooShort { min: self.min_len });
        }

        if password.len() > self.max_len {
            return Err(PasswordPolicyError::TooLong { max: self.max_len });
        }

        if password.contains(' ') {
            return Err(PasswordPolicyError::ContainsSpace);
        }

        Ok(())
    }
}

/// Boolean form of [`BasicPasswordPolicy`].
pub fn is_validate_password(password: &str) -> bool {
    BasicPasswordPolicy::new().validate(password).is_ok()
}
