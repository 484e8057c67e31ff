/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - manages users and may delete any report
pub const ROLE_ADMIN: &str = "admin";

/// Worker role - records and edits daily reports
pub const ROLE_WORKER: &str = "worker";
