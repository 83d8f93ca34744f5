use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 文章ID类型
pub type PostId = u32;

/// 文章 - 博客中一篇已发布的内容及其元数据
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 文章唯一标识符
    pub id: PostId,
    /// 文章标题
    pub title: String,
    /// 文章摘要
    pub excerpt: String,
    /// 文章正文 (Markdown)
    pub content: String,
    /// 作者显示名
    pub author: String,
    /// 发布日期
    pub published_at: NaiveDate,
    /// 阅读时长，仅用于展示，例如 "5 min read"
    pub read_time: String,
    /// 文章标签列表，保持原有顺序
    pub tags: Vec<String>,
    /// 封面图片URI
    pub cover_image: String,
}

impl Post {
    /// 文章是否带有指定标签（区分大小写的精确匹配）
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// 展示用日期，格式为 M/D/YYYY
    pub fn display_date(&self) -> String {
        format!(
            "{}/{}/{}",
            self.published_at.month(),
            self.published_at.day(),
            self.published_at.year()
        )
    }
}

/// 目录元数据 - 描述一份已构建的文章目录
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogMetadata {
    /// 目录包含的文章数量
    pub post_count: usize,
    /// 不重复的标签数量
    pub tag_count: usize,
    /// 目录创建时间
    pub created_at: DateTime<Utc>,
    /// 目录格式版本
    pub version: String,
}
