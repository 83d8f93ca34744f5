use std::collections::HashSet;

use blog_common::{compression, Post, PostId};
use tracing::debug;

use crate::error::CatalogError;
use crate::models::{CatalogSnapshot, FilterResult, PostLookup};
use crate::state::FilterState;

/// 收集全部文章的标签，去重并保持首次出现的顺序
pub fn derive_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }

    tags
}

/// 判断文章是否同时满足关键词和标签条件
///
/// 关键词对标题和摘要做不区分大小写的子串匹配，空关键词匹配全部文章。
/// 标签为精确匹配，区分大小写。
pub fn matches(post: &Post, search_term: &str, selected_tag: Option<&str>) -> bool {
    let term = search_term.to_lowercase();
    matches_normalized(post, &term, selected_tag)
}

fn matches_normalized(post: &Post, term: &str, selected_tag: Option<&str>) -> bool {
    let text_match = term.is_empty()
        || post.title.to_lowercase().contains(term)
        || post.excerpt.to_lowercase().contains(term);

    let tag_match = selected_tag.map_or(true, |tag| post.has_tag(tag));

    text_match && tag_match
}

/// 筛选文章，结果保持输入顺序
pub fn filter_posts<'a>(posts: &'a [Post], search_term: &str, selected_tag: Option<&str>) -> Vec<&'a Post> {
    let term = search_term.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_normalized(post, &term, selected_tag))
        .collect()
}

/// 置顶文章：筛选结果中的第一篇
pub fn select_featured<T>(filtered: &[T]) -> Option<&T> {
    filtered.first()
}

/// 置顶文章之后的其余文章
pub fn select_remainder<T>(filtered: &[T]) -> &[T] {
    filtered.get(1..).unwrap_or(&[])
}

pub fn find_by_id(posts: &[Post], id: PostId) -> Option<&Post> {
    posts.iter().find(|post| post.id == id)
}

pub fn lookup(posts: &[Post], id: PostId) -> PostLookup<'_> {
    PostLookup::from_option(id, find_by_id(posts, id))
}

/// 文章目录 - 持有不可变的文章列表，作为上下文传入各视图
#[derive(Debug, Clone, PartialEq)]
pub struct PostCatalog {
    posts: Vec<Post>,
}

impl PostCatalog {
    /// 创建目录，拒绝重复的文章ID
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !ids.insert(post.id) {
                return Err(CatalogError::DuplicateId(post.id));
            }
        }
        Ok(Self { posts })
    }

    /// 内置示例目录
    pub fn sample() -> Self {
        Self { posts: crate::fixtures::sample_posts().to_vec() }
    }

    /// 从JSON文章数组加载
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let posts: Vec<Post> = serde_json::from_str(json)?;
        debug!(count = posts.len(), "从JSON加载文章");
        Self::new(posts)
    }

    /// 从压缩的目录快照加载
    pub fn from_compressed(data: &[u8]) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = compression::from_compressed(data)?;
        debug!(
            count = snapshot.posts.len(),
            version = %snapshot.metadata.version,
            "从目录快照加载文章"
        );
        Self::new(snapshot.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn tags(&self) -> Vec<String> {
        derive_tags(&self.posts)
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&Post> {
        filter_posts(&self.posts, &state.search_term, state.selected_tag())
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        find_by_id(&self.posts, id)
    }

    pub fn lookup(&self, id: PostId) -> PostLookup<'_> {
        lookup(&self.posts, id)
    }

    /// 生成列表页所需的完整筛选结果
    pub fn filter_result(&self, state: &FilterState) -> FilterResult {
        let filtered = self.filter(state);
        FilterResult {
            featured: select_featured(&filtered).map(|post| (*post).clone()),
            remainder: select_remainder(&filtered).iter().map(|post| (*post).clone()).collect(),
            total: filtered.len(),
            tags: self.tags(),
        }
    }
}
