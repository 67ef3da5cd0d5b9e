//! Repository trait definition for school record storage.
//!
//! The trait is the single seam between the service layer and the storage
//! backends; handlers receive it as an injected `Arc<dyn SchoolRepository>`
//! so tests can substitute a fake store.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{NewSchool, School, SchoolId};

/// Repository trait for school record persistence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Create the backing table if it does not exist yet.
    ///
    /// Idempotent; intended to be called once at startup. Callers treat a
    /// failure as non-fatal and log it.
    ///
    /// # Returns
    /// * `Ok(())` - Schema is in place
    /// * `Err(RepositoryError)` - If schema creation fails
    async fn ensure_schema(&self) -> RepositoryResult<()>;

    /// Persist a new school record.
    ///
    /// # Arguments
    /// * `school` - The validated record to store
    ///
    /// # Returns
    /// * `Ok(SchoolId)` - Identifier assigned by the store
    /// * `Err(RepositoryError)` - If the insert fails
    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<SchoolId>;

    /// Fetch every school record in insertion order.
    ///
    /// The returned order is what the distance ranking uses as its
    /// tie-break for records at equal distance.
    ///
    /// # Returns
    /// * `Ok(Vec<School>)` - All records, possibly empty
    /// * `Err(RepositoryError)` - If the query fails
    async fn fetch_all_schools(&self) -> RepositoryResult<Vec<School>>;

    /// Verify the store is reachable.
    ///
    /// # Returns
    /// * `Ok(bool)` - True if the store answered
    /// * `Err(RepositoryError)` - If the check could not run
    async fn health_check(&self) -> RepositoryResult<bool>;
}
