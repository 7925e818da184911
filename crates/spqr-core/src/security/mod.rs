//! Security checks applied to archive entries.

pub mod path;
pub mod permissions;

pub use path::is_within;
pub use path::normalize_path;
pub use permissions::sanitize_permissions;
