//! 列表页和详情页共用的提示文案

/// 筛选结果为空时的提示
pub const NO_MATCHES_MESSAGE: &str = "No posts found matching your criteria.";

/// 文章不存在时的标题
pub const POST_NOT_FOUND_TITLE: &str = "Post Not Found";

pub const POST_NOT_FOUND_MESSAGE: &str = "The blog post you're looking for doesn't exist.";
