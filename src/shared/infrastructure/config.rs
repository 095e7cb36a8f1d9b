use crate::shared::errors::AppError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// PostgreSQL caps bind parameters per statement at 32767 for an `IN (...)` list
pub const DEFAULT_PARTITION_SIZE: usize = 32_767;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
/// Upper bound accepted for `RELATIONSHIPS_MAX_PAGE_SIZE`
pub const MAX_PAGE_SIZE_LIMIT: u32 = 10_000;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub pool_max_size: u32,
    pub pool_min_idle: u32,
    pub connection_timeout: Duration,
    pub partition_size: usize,
    pub max_page_size: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let database_url = Self::validated_database_url(env::var("DATABASE_URL").ok())?;

        let (default_max, default_min_idle) = Self::optimal_pool_size();
        let pool_max_size = parse_var("DATABASE_POOL_MAX_SIZE")?.unwrap_or(default_max);
        if pool_max_size == 0 {
            return Err(AppError::ConfigurationError(
                "DATABASE_POOL_MAX_SIZE must be positive".to_string(),
            ));
        }

        let connection_timeout = Duration::from_secs(
            parse_var("DATABASE_CONNECTION_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS),
        );

        let partition_size =
            parse_var("RELATIONSHIPS_PARTITION_SIZE")?.unwrap_or(DEFAULT_PARTITION_SIZE);
        if partition_size == 0 {
            return Err(AppError::ConfigurationError(
                "RELATIONSHIPS_PARTITION_SIZE must be positive".to_string(),
            ));
        }

        let max_page_size =
            Self::validated_max_page_size(parse_var("RELATIONSHIPS_MAX_PAGE_SIZE")?)?;

        Ok(Self {
            database_url,
            pool_max_size,
            pool_min_idle: default_min_idle.min(pool_max_size),
            connection_timeout,
            partition_size,
            max_page_size,
        })
    }

    /// Config for an already known URL, keeping every other default
    pub fn with_url(database_url: impl Into<String>) -> Self {
        let (pool_max_size, pool_min_idle) = Self::optimal_pool_size();
        Self {
            database_url: database_url.into(),
            pool_max_size,
            pool_min_idle,
            connection_timeout: Duration::from_secs(DEFAULT_CONNECTION_TIMEOUT_SECS),
            partition_size: DEFAULT_PARTITION_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }

    fn validated_database_url(value: Option<String>) -> Result<String, AppError> {
        let database_url = value.ok_or_else(|| {
            AppError::ConfigurationError("DATABASE_URL environment variable not found".to_string())
        })?;

        if !database_url.starts_with("postgres://") && !database_url.starts_with("postgresql://") {
            return Err(AppError::ConfigurationError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }

        Ok(database_url)
    }

    fn validated_max_page_size(value: Option<u32>) -> Result<u32, AppError> {
        match value.unwrap_or(DEFAULT_MAX_PAGE_SIZE) {
            0 => Err(AppError::ConfigurationError(
                "RELATIONSHIPS_MAX_PAGE_SIZE must be positive".to_string(),
            )),
            size if size > MAX_PAGE_SIZE_LIMIT => Err(AppError::ConfigurationError(format!(
                "RELATIONSHIPS_MAX_PAGE_SIZE cannot exceed {} (got {})",
                MAX_PAGE_SIZE_LIMIT, size
            ))),
            size => Ok(size),
        }
    }

    /// Base pool size on CPU count, capped at 20
    fn optimal_pool_size() -> (u32, u32) {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let max_size = std::cmp::min(cpu_count * 2, 20);
        let min_idle = std::cmp::max(2, max_size / 4);

        (max_size as u32, min_idle as u32)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            AppError::ConfigurationError(format!("Invalid value for {}: {}", name, e))
        }),
        Err(_) => Ok(None),
    }
}
