use std::sync::Arc;

use crate::domain::{NewUser, Record, User};
use crate::error::{DomainError, RepoError};
use crate::ports::UserRepository;

/// Minimal user management so posts have authors and likers to reference.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn create(&self, input: NewUser) -> Result<User, DomainError> {
        let username = input
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::validation("Username is required"))?;
        if let Some(email) = &input.email {
            if !email.contains('@') {
                return Err(DomainError::validation("Invalid email address"));
            }
        }

        let user = self.users.save(User::new(username, input.email)).await?;
        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(User::KIND, id))
    }

    /// Remove a user. Posts referencing the user are left untouched.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        match self.users.delete(id).await {
            Ok(()) => {
                tracing::info!(user_id = %id, "User deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::not_found(User::KIND, id)),
            Err(err) => Err(err.into()),
        }
    }
}
