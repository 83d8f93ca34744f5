use std::collections::HashSet;
use std::fs;
use std::path::Path;

use blog_common::{compression, CatalogMetadata, Post, FORMAT_VERSION};
use chrono::Utc;
use tracing::{info, warn};

use crate::catalog::derive_tags;
use crate::error::CatalogError;
use crate::models::CatalogSnapshot;

/// 目录构建器
pub struct CatalogBuilder {
    posts: Vec<Post>,
}

impl CatalogBuilder {
    /// 创建新的目录构建器
    pub fn new() -> Self {
        Self { posts: Vec::new() }
    }

    /// 添加文章，保持添加顺序
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// 构建目录快照
    pub fn build_snapshot(&self) -> Result<CatalogSnapshot, CatalogError> {
        if self.posts.is_empty() {
            warn!("无法构建目录，没有文章数据");
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(self.posts.len());
        for post in &self.posts {
            if !ids.insert(post.id) {
                return Err(CatalogError::DuplicateId(post.id));
            }
        }

        let tag_count = derive_tags(&self.posts).len();
        info!(posts = self.posts.len(), tags = tag_count, "目录构建完成");

        Ok(CatalogSnapshot {
            metadata: CatalogMetadata {
                post_count: self.posts.len(),
                tag_count,
                created_at: Utc::now(),
                version: format!("{}.{}", FORMAT_VERSION[0], FORMAT_VERSION[1]),
            },
            posts: self.posts.clone(),
        })
    }

    /// 构建并压缩目录
    pub fn to_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        let snapshot = self.build_snapshot()?;
        Ok(compression::to_compressed(&snapshot, FORMAT_VERSION)?)
    }

    /// 保存目录到文件
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let data = self.to_bytes()?;
        fs::write(path, &data)?;
        info!(path = %path.display(), bytes = data.len(), "目录已写入文件");
        Ok(())
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PostCatalog;
    use chrono::NaiveDate;

    fn post(id: u32, tags: &[&str]) -> Post {
        Post {
            id,
            title: format!("Post {}", id),
            excerpt: String::new(),
            content: String::new(),
            author: "Mike Johnson".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            read_time: "12 min read".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            cover_image: String::new(),
        }
    }

    #[test]
    fn empty_builder_fails() {
        assert!(matches!(CatalogBuilder::new().build_snapshot(), Err(CatalogError::Empty)));
    }

    #[test]
    fn duplicate_ids_fail() {
        let mut builder = CatalogBuilder::new();
        builder.add_post(post(3, &[]));
        builder.add_post(post(3, &[]));
        assert!(matches!(builder.build_snapshot(), Err(CatalogError::DuplicateId(3))));
    }

    #[test]
    fn metadata_counts_distinct_tags() {
        let mut builder = CatalogBuilder::new();
        builder.add_post(post(1, &["SQL", "Backend"]));
        builder.add_post(post(2, &["Backend"]));
        let snapshot = builder.build_snapshot().unwrap();
        assert_eq!(snapshot.metadata.post_count, 2);
        assert_eq!(snapshot.metadata.tag_count, 2);
        assert_eq!(snapshot.metadata.version, "1.0");
    }

    #[test]
    fn saved_file_loads_as_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.bin");

        let mut builder = CatalogBuilder::new();
        builder.add_post(post(2, &["CSS"]));
        builder.add_post(post(1, &["React"]));
        builder.save(&path).unwrap();

        let catalog = PostCatalog::from_compressed(&fs::read(&path).unwrap()).unwrap();
        let ids: Vec<u32> = catalog.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
