pub mod config;
pub mod convert;
pub mod sessions;

/// Upper bound on sessions listed per event
pub const DEFAULT_SESSION_LIMIT: u16 = 200;
