use thiserror::Error;

/// 目录编解码错误
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("数据太短，无法解析: {0} 字节")]
    TooShort(usize),

    #[error("无效的文件格式：魔数不匹配")]
    BadMagic,

    #[error("不支持的版本: {0}.{1}")]
    UnsupportedVersion(u8, u8),

    #[error("解压后数据大小不匹配: 期望 {expected} 字节, 实际 {actual} 字节")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("序列化失败: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("反序列化失败: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("压缩数据读写失败: {0}")]
    Io(#[from] std::io::Error),
}
