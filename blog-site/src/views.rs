use blog_common::{Post, PostId};
use post_filter::{select_featured, select_remainder, FilterState, PostCatalog, PostLookup};
use post_filter::{POST_NOT_FOUND_MESSAGE, POST_NOT_FOUND_TITLE};

use crate::auth::{AuthPage, AuthRedirect, AuthState};
use crate::routes::Route;

pub use post_filter::NO_MATCHES_MESSAGE;

/// 首页最多展示的文章数
const RECENT_POST_LIMIT: usize = 3;

/// 导航链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    pub active: bool,
}

/// 导航栏
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    pub links: Vec<NavLink>,
    pub actions: [&'static str; 2],
}

impl Navbar {
    /// 只有路径完全相同的链接处于激活状态
    pub fn for_route(current: &Route) -> Self {
        let links = [("Home", Route::Home), ("Blog", Route::Blog)]
            .into_iter()
            .map(|(label, route)| NavLink {
                active: &route == current,
                label,
                route,
            })
            .collect();

        Self {
            links,
            actions: ["Login", "Sign Up"],
        }
    }

    pub fn active_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Rich Content",
        description: "Create and share engaging blog posts with rich text formatting and media support.",
    },
    Feature {
        title: "Community",
        description: "Connect with other writers and readers in our vibrant community.",
    },
    Feature {
        title: "Fast & Responsive",
        description: "Lightning-fast performance with a responsive design that works on all devices.",
    },
    Feature {
        title: "Analytics",
        description: "Track your post performance and grow your audience with detailed insights.",
    },
];

/// 文章卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub route: Route,
    pub date: String,
}

impl<'a> PostCard<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            post,
            route: Route::post(post.id),
            date: post.display_date(),
        }
    }
}

/// 首页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage<'a> {
    pub headline: &'static str,
    pub features: &'static [Feature],
    pub recent_posts: Vec<PostCard<'a>>,
}

impl<'a> LandingPage<'a> {
    pub fn build(catalog: &'a PostCatalog) -> Self {
        Self {
            headline: "Share Your Story with the World",
            features: &FEATURES,
            recent_posts: catalog.posts().iter().take(RECENT_POST_LIMIT).map(PostCard::new).collect(),
        }
    }
}

/// 标签按钮
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    /// None 对应 "All"
    pub tag: Option<String>,
    pub active: bool,
}

/// 文章列表页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogListing<'a> {
    pub search_term: String,
    pub tag_chips: Vec<TagChip>,
    pub featured: Option<PostCard<'a>>,
    pub remainder: Vec<PostCard<'a>>,
}

impl<'a> BlogListing<'a> {
    pub fn build(catalog: &'a PostCatalog, state: &FilterState) -> Self {
        let selected = state.selected_tag();

        let mut tag_chips = vec![TagChip {
            label: "All".to_string(),
            tag: None,
            active: selected.is_none(),
        }];
        tag_chips.extend(catalog.tags().into_iter().map(|tag| TagChip {
            active: selected == Some(tag.as_str()),
            label: tag.clone(),
            tag: Some(tag),
        }));

        let filtered = catalog.filter(state);

        Self {
            search_term: state.search_term.clone(),
            tag_chips,
            featured: select_featured(&filtered).copied().map(PostCard::new),
            remainder: select_remainder(&filtered).iter().copied().map(PostCard::new).collect(),
        }
    }

    pub fn total(&self) -> usize {
        self.remainder.len() + usize::from(self.featured.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_none()
    }

    /// 空结果时的提示
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_MATCHES_MESSAGE)
    }
}

/// 文章不存在时的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub back_label: &'static str,
    pub back: Route,
}

pub const POST_NOT_FOUND: NotFoundNotice = NotFoundNotice {
    title: POST_NOT_FOUND_TITLE,
    message: POST_NOT_FOUND_MESSAGE,
    back_label: "Back to Blog",
    back: Route::Blog,
};

/// 文章详情页
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostDetail<'a> {
    Found(PostCard<'a>),
    NotFound(NotFoundNotice),
}

impl<'a> PostDetail<'a> {
    pub fn build(catalog: &'a PostCatalog, id: Option<PostId>) -> Self {
        match id.map(|id| catalog.lookup(id)) {
            Some(PostLookup::Found(post)) => PostDetail::Found(PostCard::new(post)),
            Some(PostLookup::NotFound(_)) | None => PostDetail::NotFound(POST_NOT_FOUND),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PostDetail::Found(_))
    }
}

/// 路由对应的页面
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    Landing(LandingPage<'a>),
    Listing(BlogListing<'a>),
    Detail(PostDetail<'a>),
    Auth(AuthPage),
    NotFound { path: String },
}

/// 站点上下文 - 显式传入视图，生命周期跟随视图树
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub catalog: PostCatalog,
    pub auth: AuthState,
}

impl SiteContext {
    pub fn new(catalog: PostCatalog, auth: AuthState) -> Self {
        Self { catalog, auth }
    }

    pub fn navbar(&self, route: &Route) -> Navbar {
        Navbar::for_route(route)
    }

    /// 登录页挂载时按当前会话决定是否跳转
    pub fn auth_redirect(&self) -> AuthRedirect {
        AuthPage::new().on_mount(&self.auth)
    }

    pub fn render(&self, route: &Route, state: &FilterState) -> Page<'_> {
        match route {
            Route::Home => Page::Landing(LandingPage::build(&self.catalog)),
            Route::Blog => Page::Listing(BlogListing::build(&self.catalog, state)),
            Route::BlogPost { id } => Page::Detail(PostDetail::build(&self.catalog, *id)),
            Route::Auth => Page::Auth(AuthPage::new()),
            Route::NotFound { path } => Page::NotFound { path: path.clone() },
        }
    }
}
