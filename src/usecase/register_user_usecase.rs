use crate::domain::{
    error::{RegistrationError, RepositoryError},
    models::{
        account::{Account, RegisteredUser},
        outcome::RegistrationOutcome,
    },
    repositories::account_repository::AccountRepository,
    services::{password_service::PasswordHasher, registration_logger::RegistrationLogger},
    validation::validate_registration,
};

pub struct RegisterUserUsecase<R: AccountRepository, P: PasswordHasher, L: RegistrationLogger> {
    account_repository: R,
    password_hasher: P,
    logger: L,
}

impl<R: AccountRepository, P: PasswordHasher, L: RegistrationLogger> RegisterUserUsecase<R, P, L> {
    pub fn new(account_repository: R, password_hasher: P, logger: L) -> Self {
        Self {
            account_repository,
            password_hasher,
            logger,
        }
    }

    /// Validate, hash and store a new account.
    ///
    /// Never fails: every error path is folded into the returned outcome.
    /// Store failures are not retried.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> RegistrationOutcome
    where
        R: Send + Sync,
        P: Send + Sync,
        L: Send + Sync,
    {
        self.create_account(username, email, password).await.into()
    }

    async fn create_account(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<RegisteredUser, RegistrationError>
    where
        R: Send + Sync,
        P: Send + Sync,
        L: Send + Sync,
    {
        self.logger.attempt(&username);

        // Validate every field before touching the hasher or the store
        let validation = validate_registration(&username, &email, &password);
        if !validation.valid {
            self.logger
                .validation_failed(&username, validation.errors.len());
            return Err(RegistrationError::Validation(validation.errors));
        }

        // Hash password
        let digest = self.password_hasher.hash(&password).map_err(|e| {
            self.logger.hashing_failed(&username, &e.to_string());
            RegistrationError::from(e)
        })?;

        let account = Account::new(username, email, digest);

        // Uniqueness check and insert happen atomically inside the store
        match self
            .account_repository
            .insert(account.username(), account.email(), account.password_hash())
            .await
        {
            Ok(()) => {}
            Err(RepositoryError::Duplicate) => {
                self.logger.duplicate(account.username());
                return Err(RegistrationError::Duplicate);
            }
            Err(e) => {
                self.logger.store_error(account.username(), &e.to_string());
                return Err(e.into());
            }
        }

        self.logger.registered(account.username());

        Ok(account.into())
    }
}
