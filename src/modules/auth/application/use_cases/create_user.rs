use async_trait::async_trait;
use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::{
    unusable_password, PhoneNumber, PhoneNumberError, User,
};
use crate::auth::application::helpers::{PhoneNumberGuard, PhoneNumberGuardError};
use crate::auth::application::ports::incoming::{PasswordPolicy, PasswordPolicyError};
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

// ========================= Command =========================

/// Validated input for account creation. Flags left unset take the defaults
/// of the chosen entry point (`create_user` or `create_superuser`).
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    phone_number: PhoneNumber,
    password: Option<String>,
    email: Option<String>,
    first_name: String,
    last_name: String,
    is_staff: Option<bool>,
    is_active: Option<bool>,
    is_superuser: Option<bool>,
}

impl CreateUserCommand {
    pub fn new(phone_number: &str, password: Option<String>) -> Result<Self, CreateUserError> {
        let phone_number = PhoneNumber::new(phone_number).map_err(|e| match e {
            PhoneNumberError::Empty => CreateUserError::PhoneNumberRequired,
            other => CreateUserError::InvalidPhoneNumber(other.to_string()),
        })?;

        Ok(Self {
            phone_number,
            password,
            email: None,
            first_name: String::new(),
            last_name: String::new(),
            is_staff: None,
            is_active: None,
            is_superuser: None,
        })
    }

    /// Blank input clears the email; anything else must be a valid address.
    pub fn with_email(mut self, email: &str) -> Result<Self, CreateUserError> {
        self.email = normalize_email(email).map_err(|_| CreateUserError::InvalidEmail)?;
        Ok(self)
    }

    pub fn with_names(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.trim().to_string();
        self.last_name = last_name.trim().to_string();
        self
    }

    pub fn with_staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = Some(is_superuser);
        self
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEmail;

/// Lowercases the domain part only; the local part is case-sensitive.
pub(crate) fn normalize_email(raw: &str) -> Result<Option<String>, InvalidEmail> {
    let email = raw.trim();
    if email.is_empty() {
        return Ok(None);
    }
    if !EmailAddress::is_valid(email) {
        return Err(InvalidEmail);
    }

    Ok(Some(match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }))
}

// ========================= Errors =========================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("The given phone number must be set")]
    PhoneNumberRequired,

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Weak password: {0}")]
    WeakPassword(PasswordPolicyError),

    #[error("User with this phone number already exists.")]
    PhoneNumberTaken,

    #[error("Superuser must have is_staff=True.")]
    SuperuserMustBeStaff,

    #[error("Superuser must have is_superuser=True.")]
    SuperuserMustBeSuperuser,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    /// Regular account: staff and superuser default to false, active to true.
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;

    /// Administrative account: every flag defaults to true, and staff or
    /// superuser explicitly set to false is rejected.
    async fn create_superuser(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    phone_guard: PhoneNumberGuard,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
}

struct Flags {
    is_staff: bool,
    is_active: bool,
    is_superuser: bool,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        phone_guard: PhoneNumberGuard,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        password_policy: Arc<dyn PasswordPolicy + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            phone_guard,
            hasher,
            password_policy,
        }
    }

    async fn persist(&self, command: CreateUserCommand, flags: Flags) -> Result<User, CreateUserError> {
        if let Some(password) = &command.password {
            self.password_policy.validate(password).map_err(|e| {
                warn!("Rejected password for {}: {}", command.phone_number, e);
                CreateUserError::WeakPassword(e)
            })?;
        }

        self.phone_guard
            .ensure_available(&command.phone_number, None)
            .await
            .map_err(|e| match e {
                PhoneNumberGuardError::Taken => {
                    warn!("Phone number already registered: {}", command.phone_number);
                    CreateUserError::PhoneNumberTaken
                }
                PhoneNumberGuardError::RepositoryError(msg) => CreateUserError::RepositoryError(msg),
            })?;

        let (password_hash, password_set) = match &command.password {
            Some(password) => {
                let hash = self.hasher.hash_password(password).await.map_err(|e| {
                    error!("Password hashing failed: {}", e);
                    CreateUserError::HashingFailed(e.to_string())
                })?;
                (hash, true)
            }
            None => (unusable_password(), false),
        };

        let data = CreateUserData {
            phone_number: command.phone_number,
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            password_set,
            is_staff: flags.is_staff,
            is_active: flags.is_active,
            is_superuser: flags.is_superuser,
        };

        match self.repository.create_user(data).await {
            Ok(user) => {
                info!(
                    "User created: {} (staff: {}, superuser: {})",
                    user.id, user.is_staff, user.is_superuser
                );
                Ok(user)
            }
            Err(UserRepositoryError::PhoneNumberTaken) => {
                warn!("Phone number claimed concurrently");
                Err(CreateUserError::PhoneNumberTaken)
            }
            Err(e) => {
                error!("Failed to create user: {}", e);
                Err(CreateUserError::RepositoryError(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl<R> ICreateUserUseCase for CreateUserUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let flags = Flags {
            is_staff: command.is_staff.unwrap_or(false),
            is_active: command.is_active.unwrap_or(true),
            is_superuser: command.is_superuser.unwrap_or(false),
        };

        self.persist(command, flags).await
    }

    async fn create_superuser(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let flags = Flags {
            is_staff: command.is_staff.unwrap_or(true),
            is_active: command.is_active.unwrap_or(true),
            is_superuser: command.is_superuser.unwrap_or(true),
        };

        if !flags.is_staff {
            return Err(CreateUserError::SuperuserMustBeStaff);
        }
        if !flags.is_superuser {
            return Err(CreateUserError::SuperuserMustBeSuperuser);
        }

        self.persist(command, flags).await
    }
}
