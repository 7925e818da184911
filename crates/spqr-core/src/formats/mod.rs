//! Archive format implementations.

pub mod common;
pub mod traits;
pub mod zip;

pub use traits::ArchiveFormat;
pub use self::zip::ZipArchive;
