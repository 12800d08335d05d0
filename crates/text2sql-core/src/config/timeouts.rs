//! Centralized timeout configuration
//!
//! Default timeout values for the two external calls. All of them can be
//! overridden via configuration.

use std::time::Duration;

/// Default timeout values for model requests
pub mod model {
    use super::*;

    /// Default connection timeout for model APIs (30 seconds)
    pub const CONNECTION_SECS: u64 = 30;

    /// Default request timeout for model APIs (120 seconds)
    ///
    /// Hosted inference may load the model on the first request.
    pub const REQUEST_SECS: u64 = 120;

    /// Get connection timeout as Duration
    pub fn connection_timeout() -> Duration {
        Duration::from_secs(CONNECTION_SECS)
    }

    /// Get request timeout as Duration
    pub fn request_timeout() -> Duration {
        Duration::from_secs(REQUEST_SECS)
    }
}

/// Default timeout values for database operations
pub mod database {
    use super::*;

    /// Default timeout for opening a connection (30 seconds)
    pub const CONNECT_SECS: u64 = 30;

    /// Get connect timeout as Duration
    pub fn connect_timeout() -> Duration {
        Duration::from_secs(CONNECT_SECS)
    }
}
