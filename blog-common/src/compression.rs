use std::io::Read;
use flate2::{Compression, write::GzEncoder, read::GzDecoder};
use crate::error::CodecError;

/// 魔数常量 - 用于标识目录文件格式
pub const MAGIC_BYTES: &[u8] = b"BLGCAT";

/// 当前目录格式版本
pub const FORMAT_VERSION: [u8; 2] = [1, 0];

/// 预分配时相对压缩数据长度的最大倍数
const MAX_PREALLOC_RATIO: usize = 8;

/// 头部长度：魔数 + 版本号 + 原始数据大小
const HEADER_LEN: usize = MAGIC_BYTES.len() + 2 + 4;

/// 将对象序列化为二进制格式
pub fn to_binary<T: serde::Serialize>(obj: &T) -> Result<Vec<u8>, CodecError> {
    Ok(bincode::serde::encode_to_vec(obj, bincode::config::standard())?)
}

/// 从二进制格式反序列化对象
pub fn from_binary<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T, CodecError> {
    let (value, _) = bincode::serde::decode_from_slice(data, bincode::config::standard())?;
    Ok(value)
}

/// 将对象序列化为压缩的二进制格式
pub fn to_compressed<T: serde::Serialize>(obj: &T, version: [u8; 2]) -> Result<Vec<u8>, CodecError> {
    let binary = to_binary(obj)?;

    let mut output = Vec::with_capacity(HEADER_LEN + binary.len() / 2);
    output.extend_from_slice(MAGIC_BYTES);
    output.extend_from_slice(&version);
    output.extend_from_slice(&(binary.len() as u32).to_le_bytes());

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    std::io::Write::write_all(&mut encoder, &binary)?;
    output.extend_from_slice(&encoder.finish()?);

    Ok(output)
}

/// 从压缩的二进制格式反序列化对象，支持到当前主版本
pub fn from_compressed<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T, CodecError> {
    from_compressed_with_max_version(data, FORMAT_VERSION[0])
}

/// 从压缩的二进制格式反序列化对象，允许指定支持的最大主版本
pub fn from_compressed_with_max_version<T: serde::de::DeserializeOwned>(
    data: &[u8],
    max_version: u8,
) -> Result<T, CodecError> {
    validate_compressed_data_with_max_version(data, max_version)?;

    // 读取原始数据大小
    let size_offset = MAGIC_BYTES.len() + 2;
    let mut size_bytes = [0u8; 4];
    size_bytes.copy_from_slice(&data[size_offset..size_offset + 4]);
    let original_size = u32::from_le_bytes(size_bytes) as usize;

    // 头部大小不可信：预分配以压缩数据长度为上限，解压最多多读一个字节
    let compressed = &data[HEADER_LEN..];
    let mut decoder = GzDecoder::new(compressed).take(original_size as u64 + 1);
    let mut decompressed = Vec::with_capacity(original_size.min(compressed.len() * MAX_PREALLOC_RATIO));
    decoder.read_to_end(&mut decompressed)?;

    if decompressed.len() != original_size {
        return Err(CodecError::SizeMismatch {
            expected: original_size,
            actual: decompressed.len(),
        });
    }

    from_binary(&decompressed)
}

/// 验证压缩数据头部是否有效，返回版本号
pub fn validate_compressed_data(data: &[u8]) -> Result<[u8; 2], CodecError> {
    validate_compressed_data_with_max_version(data, FORMAT_VERSION[0])
}

/// 验证压缩数据头部是否有效，允许指定支持的最大主版本
pub fn validate_compressed_data_with_max_version(data: &[u8], max_version: u8) -> Result<[u8; 2], CodecError> {
    if data.len() < HEADER_LEN {
        return Err(CodecError::TooShort(data.len()));
    }

    if &data[..MAGIC_BYTES.len()] != MAGIC_BYTES {
        return Err(CodecError::BadMagic);
    }

    let version_offset = MAGIC_BYTES.len();
    let version = [data[version_offset], data[version_offset + 1]];
    if version[0] > max_version {
        return Err(CodecError::UnsupportedVersion(version[0], version[1]));
    }

    Ok(version)
}
