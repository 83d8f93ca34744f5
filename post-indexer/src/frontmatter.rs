use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use blog_common::{Post, PostId};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 头部中的 `key: value` 行
static FIELD_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9_]*)\s*:\s*(.*?)\s*$").unwrap());

const DELIMITER: &str = "---";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{}: 缺少字段 `{field}`", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("{}: 字段 `{field}` 的值无效: {value}", path.display())]
    InvalidField { path: PathBuf, field: &'static str, value: String },

    #[error("{}: 头部没有结束标记 `---`", path.display())]
    Unterminated { path: PathBuf },

    #[error("{}: 第 {line} 行无法解析: {text}", path.display())]
    BadLine { path: PathBuf, line: usize, text: String },

    #[error("文章ID {id} 重复: {} 与 {}", first.display(), second.display())]
    DuplicateId { id: PostId, first: PathBuf, second: PathBuf },

    #[error("读取 {} 失败: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("遍历目录失败: {0}")]
    Walk(#[from] walkdir::Error),
}

/// 解析带头部的Markdown文章；没有头部的文件返回 None
pub fn parse_post(path: &Path, text: &str) -> Result<Option<Post>, SourceError> {
    let mut lines = text.lines();
    match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => {}
        _ => return Ok(None),
    }

    let mut fields = HashMap::new();
    let mut terminated = false;
    let mut consumed = 1;
    for line in lines.by_ref() {
        consumed += 1;
        if line.trim_end() == DELIMITER {
            terminated = true;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        let caps = FIELD_LINE.captures(line).ok_or_else(|| SourceError::BadLine {
            path: path.to_path_buf(),
            line: consumed,
            text: line.to_string(),
        })?;
        fields.insert(caps[1].to_string(), caps[2].to_string());
    }

    if !terminated {
        return Err(SourceError::Unterminated { path: path.to_path_buf() });
    }

    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    let field = |name: &'static str| -> Result<String, SourceError> {
        fields.get(name).cloned().ok_or(SourceError::MissingField {
            path: path.to_path_buf(),
            field: name,
        })
    };
    let invalid = |name: &'static str, value: String| SourceError::InvalidField {
        path: path.to_path_buf(),
        field: name,
        value,
    };

    let id_raw = field("id")?;
    let id: PostId = id_raw.parse().map_err(|_| invalid("id", id_raw.clone()))?;

    let date_raw = field("publishedAt")?;
    let published_at =
        NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|_| invalid("publishedAt", date_raw.clone()))?;

    Ok(Some(Post {
        id,
        title: field("title")?,
        excerpt: field("excerpt")?,
        content,
        author: field("author")?,
        published_at,
        read_time: field("readTime")?,
        tags: parse_tags(fields.get("tags").map(String::as_str)),
        cover_image: fields.get("coverImage").cloned().unwrap_or_default(),
    }))
}

/// 逗号分隔的标签，去掉空白和空项
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// 扫描目录中的Markdown文章，返回文章列表和跳过的文件数
pub fn scan_posts(dir: &Path) -> Result<(Vec<Post>, usize), SourceError> {
    let mut posts = Vec::new();
    let mut sources: HashMap<PostId, PathBuf> = HashMap::new();
    let mut skipped = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "md") {
            continue;
        }

        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match parse_post(path, &text)? {
            Some(post) => {
                if let Some(first) = sources.insert(post.id, path.to_path_buf()) {
                    return Err(SourceError::DuplicateId {
                        id: post.id,
                        first,
                        second: path.to_path_buf(),
                    });
                }
                debug!(id = post.id, path = %path.display(), "解析文章");
                posts.push(post);
            }
            None => {
                warn!(path = %path.display(), "文件没有头部，已跳过");
                skipped += 1;
            }
        }
    }

    // 最新的文章排在前面，同一天按ID排序
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));

    Ok((posts, skipped))
}
