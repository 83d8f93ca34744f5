pub mod compression;
pub mod error;
pub mod models;

// 重新导出常用类型和函数，方便直接使用
pub use compression::{to_compressed, from_compressed, to_binary, from_binary, validate_compressed_data, FORMAT_VERSION};
pub use error::CodecError;
pub use models::{CatalogMetadata, Post, PostId};
