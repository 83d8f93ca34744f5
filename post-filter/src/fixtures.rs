use blog_common::Post;
use once_cell::sync::Lazy;

/// 内置示例文章 (JSON)
pub const SAMPLE_POSTS_JSON: &str = include_str!("../data/sample_posts.json");

static SAMPLE_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    serde_json::from_str(SAMPLE_POSTS_JSON).unwrap_or_else(|e| panic!("内置示例文章格式错误: {}", e))
});

/// 内置示例文章，首次访问时解析
pub fn sample_posts() -> &'static [Post] {
    &SAMPLE_POSTS
}
