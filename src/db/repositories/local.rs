//! In-memory repository for unit testing and local development.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{NewSchool, School, SchoolId};
use crate::db::repository::{RepositoryResult, SchoolRepository};

/// In-memory implementation of [`SchoolRepository`].
///
/// Records live in a vector guarded by a read-write lock; ids come from a
/// monotonically increasing counter, so iteration order is insertion order.
/// State is process-local and lost on shutdown.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: RwLock<LocalStore>,
}

#[derive(Debug, Default)]
struct LocalStore {
    next_id: i64,
    schools: Vec<School>,
}

impl LocalRepository {
    /// Create an empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().schools.len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().schools.is_empty()
    }
}

#[async_trait]
impl SchoolRepository for LocalRepository {
    async fn ensure_schema(&self) -> RepositoryResult<()> {
        // Nothing to create for the in-memory store.
        Ok(())
    }

    async fn insert_school(&self, school: &NewSchool) -> RepositoryResult<SchoolId> {
        let mut store = self.inner.write();
        store.next_id += 1;
        let id = SchoolId::new(store.next_id);

        store.schools.push(School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            latitude: school.latitude,
            longitude: school.longitude,
        });

        Ok(id)
    }

    async fn fetch_all_schools(&self) -> RepositoryResult<Vec<School>> {
        Ok(self.inner.read().schools.clone())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
