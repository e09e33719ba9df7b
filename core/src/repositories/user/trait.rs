//! User repository trait defining the interface for user data persistence.
//!
//! User rows are owned by another part of the system; this interface only
//! covers the lookups and the save the authentication flow needs.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use pa_core::repositories::UserRepository;
/// use pa_core::domain::entities::user::User;
/// use pa_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_by_phone(&self, phone: u64) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_by_verification_id(&self, id: &str) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn update(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by primary key
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Find a user by phone number
    ///
    /// # Arguments
    /// * `phone` - International number without the leading `+`
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that phone
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_phone(&self, phone: u64) -> Result<Option<User>, DomainError>;

    /// Find the user holding a pending challenge id
    ///
    /// # Arguments
    /// * `verification_id` - Provider request id returned when the challenge started
    ///
    /// # Returns
    /// * `Ok(Some(User))` - The user whose stored `verification_id` matches
    /// * `Ok(None)` - No user holds that id (unknown or already consumed)
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_verification_id(
        &self,
        verification_id: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Persist `verification_id`, `code` and `updated_at` of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user
    /// * `Err(DomainError::NotFound)` - The user no longer exists
    /// * `Err(DomainError)` - Database or other error occurred
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
