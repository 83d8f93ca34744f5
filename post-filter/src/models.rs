use blog_common::{CatalogMetadata, Post, PostId};
use serde::{Deserialize, Serialize};

/// 目录快照 - 写入目录文件的完整内容
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CatalogSnapshot {
    /// 目录元数据
    pub metadata: CatalogMetadata,
    /// 按展示顺序排列的文章列表
    pub posts: Vec<Post>,
}

/// 按ID查找文章的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostLookup<'a> {
    /// 找到文章
    Found(&'a Post),
    /// 没有该ID的文章
    NotFound(PostId),
}

impl<'a> PostLookup<'a> {
    pub fn from_option(id: PostId, post: Option<&'a Post>) -> Self {
        match post {
            Some(post) => PostLookup::Found(post),
            None => PostLookup::NotFound(id),
        }
    }

    pub fn post(&self) -> Option<&'a Post> {
        match self {
            PostLookup::Found(post) => Some(post),
            PostLookup::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PostLookup::Found(_))
    }
}

/// 筛选结果 - 返回给客户端的列表页数据
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    /// 置顶展示的第一篇文章
    pub featured: Option<Post>,
    /// 其余文章，保持原有顺序
    pub remainder: Vec<Post>,
    /// 匹配文章总数
    pub total: usize,
    /// 全部标签（与筛选条件无关）
    pub tags: Vec<String>,
}

/// 查找结果的JS表示
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LookupResult {
    Found { post: Post },
    NotFound { id: PostId },
}

impl From<PostLookup<'_>> for LookupResult {
    fn from(lookup: PostLookup<'_>) -> Self {
        match lookup {
            PostLookup::Found(post) => LookupResult::Found { post: post.clone() },
            PostLookup::NotFound(id) => LookupResult::NotFound { id },
        }
    }
}
