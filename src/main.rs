use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_backend::auth::adapter::outgoing::security::Argon2Hasher;
use course_backend::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use course_backend::auth::application::helpers::PhoneNumberGuard;
use course_backend::auth::application::services::password::BasicPasswordPolicy;
use course_backend::auth::application::use_cases::create_user::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, ICreateUserUseCase,
};
use course_backend::shared::config::{load_env_files, BootstrapSuperuser, DatabaseConfig};
use course_backend::shared::database::connect_and_migrate;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let env_name = load_env_files();
    info!("Starting course backend ({})", env_name);

    let db_config = DatabaseConfig::from_env().context("invalid database configuration")?;
    let db = Arc::new(
        connect_and_migrate(&db_config)
            .await
            .context("failed to prepare the database")?,
    );

    let Some(superuser) = BootstrapSuperuser::from_env() else {
        info!("No bootstrap superuser configured");
        return Ok(());
    };

    let user_query = Arc::new(UserQueryPostgres::new(db.clone()));
    let create_user = CreateUserUseCase::new(
        UserRepositoryPostgres::new(db.clone()),
        PhoneNumberGuard::new(user_query),
        Arc::new(Argon2Hasher::from_env()),
        Arc::new(BasicPasswordPolicy::default()),
    );

    let command = CreateUserCommand::new(&superuser.phone_number, Some(superuser.password))
        .context("invalid SUPERUSER_PHONE_NUMBER")?;

    match create_user.create_superuser(command).await {
        Ok(user) => info!("Superuser {} created", user.phone_number),
        Err(CreateUserError::PhoneNumberTaken) => {
            warn!("Superuser {} already exists, skipping", superuser.phone_number)
        }
        Err(e) => return Err(e).context("failed to create bootstrap superuser"),
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
