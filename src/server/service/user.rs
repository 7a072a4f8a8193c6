//! Registration, login and account management.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{AuthenticateDto, UserFieldsDto},
    server::{
        data::user::{UserRecord, UserRepository},
        error::{domain::DomainError, AppError},
        model::{
            user::{User, UserParams},
            validate::PASSWORD_REQUIRED,
        },
        service::{catalog::is_unique_violation, token::TokenService},
        util::parse::parse_id,
    },
};

pub const USER_NOT_FOUND: &str = "User not found";
pub const INCORRECT_CREDENTIALS: &str = "Username or password is incorrect";

fn username_taken(username: &str) -> DomainError {
    DomainError::Duplicate(format!("Username \"{}\" is already taken", username))
}

fn email_registered(email: &str) -> DomainError {
    DomainError::Duplicate(format!("Email \"{}\" is already registered", email))
}

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    hash_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `hash_cost` - bcrypt work factor for new password hashes
    pub fn new(db: &'a DatabaseConnection, hash_cost: u32) -> Self {
        Self { db, hash_cost }
    }

    /// Registers a new account.
    ///
    /// Username and email are checked for collisions before the password is hashed, so a
    /// rejected registration costs no hashing work.
    ///
    /// # Returns
    /// - `Ok(User)` - The new user
    /// - `Err(AppError::Validation)` - A required field is missing or malformed
    /// - `Err(AppError::DomainErr(Duplicate))` - Username or email already in use
    pub async fn register(&self, fields: UserFieldsDto) -> Result<User, AppError> {
        let params = UserParams::for_register(fields)?;

        self.ensure_username_free(&params.username).await?;
        self.ensure_email_free(&params.email).await?;

        let Some(password) = params.password.as_deref() else {
            return Err(AppError::Validation(PASSWORD_REQUIRED.to_string()));
        };
        let hash = bcrypt::hash(password, self.hash_cost)?;

        let record = UserRecord {
            username: params.username,
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            hash,
        };

        let user = self.insert_record(record).await?;
        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks a username and password and issues a token.
    ///
    /// An unknown username and a wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a freshly issued token
    /// - `Err(AppError::BadRequest)` - Credentials do not match
    pub async fn authenticate(
        &self,
        tokens: &TokenService,
        credentials: AuthenticateDto,
    ) -> Result<(User, String), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_username(credentials.username.trim()).await? else {
            return Err(AppError::BadRequest(INCORRECT_CREDENTIALS.to_string()));
        };

        if !bcrypt::verify(&credentials.password, &user.hash)? {
            return Err(AppError::BadRequest(INCORRECT_CREDENTIALS.to_string()));
        }

        let token = tokens.issue(user.id)?;

        Ok((user, token))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Gets a user by raw path id.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::DomainErr(NotFound))` - No user, or the id cannot name one
    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        let Some(parsed) = parse_id(id) else {
            return Err(DomainError::NotFound(USER_NOT_FOUND.to_string()).into());
        };

        UserRepository::new(self.db)
            .find_by_id(parsed)
            .await?
            .ok_or_else(|| DomainError::NotFound(USER_NOT_FOUND.to_string()).into())
    }

    /// Replaces a user's profile.
    ///
    /// The password is re-hashed only when a new one is supplied. Username and email are
    /// re-checked only when they change.
    pub async fn update(&self, id: &str, fields: UserFieldsDto) -> Result<User, AppError> {
        let existing = self.get_by_id(id).await?;
        let params = UserParams::for_update(fields)?;

        if params.username != existing.username {
            self.ensure_username_free(&params.username).await?;
        }
        if params.email != existing.email {
            self.ensure_email_free(&params.email).await?;
        }

        let hash = match params.password.as_deref() {
            Some(password) => bcrypt::hash(password, self.hash_cost)?,
            None => existing.hash,
        };

        let record = UserRecord {
            username: params.username,
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            hash,
        };

        self.replace_record(existing.id, record).await
    }

    /// Deletes a user. Tokens issued to the user stop working immediately.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let Some(parsed) = parse_id(id) else {
            return Ok(());
        };

        UserRepository::new(self.db).delete(parsed).await?;

        Ok(())
    }

    /// Writes a new user, reporting a unique index violation as the key that collided.
    pub(super) async fn insert_record(&self, record: UserRecord) -> Result<User, AppError> {
        match UserRepository::new(self.db).create(record.clone()).await {
            Ok(user) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(self.collision(&record, None).await),
            Err(err) => Err(err.into()),
        }
    }

    /// Overwrites a user, reporting a unique index violation as the key that collided.
    pub(super) async fn replace_record(
        &self,
        id: i32,
        record: UserRecord,
    ) -> Result<User, AppError> {
        match UserRepository::new(self.db).update(id, record.clone()).await {
            Ok(user) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(self.collision(&record, Some(id)).await),
            Err(sea_orm::DbErr::RecordNotFound(_)) => {
                Err(DomainError::NotFound(USER_NOT_FOUND.to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn ensure_username_free(&self, username: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        if repo.find_by_username(username).await?.is_some() {
            return Err(username_taken(username).into());
        }
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        if repo.find_by_email(email).await?.is_some() {
            return Err(email_registered(email).into());
        }
        Ok(())
    }

    /// Works out which key a concurrent writer took after a unique violation.
    ///
    /// `own_id` is the user being updated, whose own username does not count as taken.
    async fn collision(&self, record: &UserRecord, own_id: Option<i32>) -> AppError {
        let repo = UserRepository::new(self.db);
        match repo.find_by_username(&record.username).await {
            Ok(Some(user)) if Some(user.id) != own_id => username_taken(&record.username).into(),
            Ok(_) => email_registered(&record.email).into(),
            Err(err) => err.into(),
        }
    }
}
