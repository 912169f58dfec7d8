//! Shared test utilities for belt-db tests.

pub(crate) mod helpers {
    use crate::BeltDb;

    /// Create an in-memory database for testing.
    pub async fn test_db() -> BeltDb {
        BeltDb::open_local(":memory:").await.unwrap()
    }
}
