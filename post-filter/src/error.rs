use blog_common::{CodecError, PostId};
use thiserror::Error;

/// 目录加载与构建错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("无法构建目录: 没有文章数据")]
    Empty,

    #[error("文章ID重复: {0}")]
    DuplicateId(PostId),

    #[error("目录解码失败: {0}")]
    Codec(#[from] CodecError),

    #[error("解析文章JSON失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("目录文件读写失败: {0}")]
    Io(#[from] std::io::Error),
}
