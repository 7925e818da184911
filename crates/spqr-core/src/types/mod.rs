//! Type-safe wrappers for extraction.
//!
//! Security-relevant types can only be built through validation: there is no
//! `From<PathBuf>` for [`SafePath`] or [`DestDir`].

pub mod dest_dir;
pub mod entry_type;
pub mod safe_path;

pub use dest_dir::DestDir;
pub use entry_type::EntryType;
pub use safe_path::SafePath;
