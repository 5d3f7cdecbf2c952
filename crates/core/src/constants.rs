//! Shared constants for quotebook.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable holding the listening host.
pub const HOST_ENV: &str = "HOST";

/// Environment variable holding the PostgreSQL connection string.
pub const DB_URL_ENV: &str = "DB_URL";

/// Host the server binds to when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";
