/// Isolated test database utility
///
/// Each test gets its own database, created on the server named by
/// TEST_DATABASE_URL, migrated before the test body runs and dropped afterwards.
use catalog_relations::shared::infrastructure::DbPool;
use diesel::r2d2::{self, ConnectionManager};
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use futures::future::BoxFuture;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");
static TEST_DB_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// #[ignore]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     test_db.run_test(|pool| {
///         Box::pin(async move {
///             let repository = repository_with_pool(pool, 10);
///             // Test...
///         })
///     }).await;
/// }
/// ```
pub struct TestDb {
    default_db_url: String,
    name: String,
    pool: DbPool,
}

impl TestDb {
    /// Database name format: relations_test_{process_id}_{counter}
    pub fn new() -> Self {
        dotenvy::dotenv().ok();

        let name = format!(
            "relations_test_{}_{}",
            std::process::id(),
            TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst)
        );

        let test_db_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL must be set in .env for tests");

        let mut conn = PgConnection::establish(&test_db_url)
            .expect("Failed to connect to test database server");

        sql_query(format!("CREATE DATABASE {}", name))
            .execute(&mut conn)
            .unwrap_or_else(|e| panic!("Failed to create test database {}: {}", name, e));

        // Swap the database name (everything after the last '/')
        let isolated_db_url = match test_db_url.rfind('/') {
            Some(last_slash) => format!("{}/{}", &test_db_url[..last_slash], name),
            None => panic!("Invalid TEST_DATABASE_URL format: {}", test_db_url),
        };

        let manager = ConnectionManager::<PgConnection>::new(isolated_db_url);
        let pool = r2d2::Pool::builder()
            .max_size(5)
            .test_on_check_out(true)
            .build(manager)
            .expect("Failed to build test database connection pool");

        Self {
            default_db_url: test_db_url,
            name,
            pool,
        }
    }

    /// Migrate, then hand the pool to the test body
    pub async fn run_test(&self, test: impl Fn(DbPool) -> BoxFuture<'static, ()>) {
        {
            let conn = &mut self
                .pool
                .get()
                .expect("Unable to connect to the test database");

            conn.run_pending_migrations(MIGRATIONS)
                .expect("Unable to migrate the test database");
        }

        test(self.pool.clone()).await;
    }
}

impl Drop for TestDb {
    /// A panicking test leaves its database behind for inspection.
    fn drop(&mut self) {
        if thread::panicking() {
            eprintln!(
                "TestDb leaking database '{}' due to panic, preserved for debugging",
                self.name
            );
            return;
        }

        let mut conn = match PgConnection::establish(&self.default_db_url) {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("Failed to reconnect for cleanup of '{}': {}", self.name, e);
                return;
            }
        };

        if let Err(e) = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut conn)
        {
            eprintln!(
                "Failed to terminate connections for '{}': {}",
                self.name, e
            );
        }

        match sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut conn) {
            Ok(_) => log::debug!("Cleaned up test database: {}", self.name),
            Err(e) => eprintln!("Failed to drop test database '{}': {}", self.name, e),
        }
    }
}
