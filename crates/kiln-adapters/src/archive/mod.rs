//! Archive adapters.

mod zip_writer;

pub use zip_writer::{CHUNK_SIZE, ZipArchiver};
