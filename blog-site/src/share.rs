use blog_common::Post;
use thiserror::Error;
use tracing::debug;

/// 分享内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn for_post(post: &Post, url: &str) -> Self {
        Self {
            title: post.title.clone(),
            text: post.excerpt.clone(),
            url: url.to_string(),
        }
    }
}

/// 短暂显示的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LINK_COPIED: Notice = Notice {
    title: "Link copied!",
    description: "The blog post link has been copied to your clipboard.",
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("无法写入剪贴板: {0}")]
    Clipboard(String),
}

/// 平台分享能力
pub trait SharePlatform {
    /// 平台是否提供原生分享
    fn supports_native_share(&self) -> bool;

    fn share(&self, request: &ShareRequest);

    fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// 交给平台原生分享
    Shared,
    /// 已复制链接，附带提示
    LinkCopied { notice: Notice },
}

impl ShareOutcome {
    /// 两种结果都算分享成功
    pub fn is_shared(&self) -> bool {
        true
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::LinkCopied { notice } => Some(notice),
        }
    }
}

/// 分享文章：优先使用原生分享，否则复制当前链接
pub fn share_post<S: SharePlatform>(platform: &S, post: &Post, url: &str) -> Result<ShareOutcome, ShareError> {
    if platform.supports_native_share() {
        platform.share(&ShareRequest::for_post(post, url));
        debug!(post = post.id, "已调用原生分享");
        return Ok(ShareOutcome::Shared);
    }

    platform.copy_to_clipboard(url)?;
    debug!(post = post.id, "已复制文章链接");
    Ok(ShareOutcome::LinkCopied { notice: LINK_COPIED })
}
