use blog_common::PostId;

/// 站点路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// 首页 `/`
    Home,
    /// 文章列表 `/blog`
    Blog,
    /// 文章详情 `/blog/:id`，无法解析的ID为 None
    BlogPost { id: Option<PostId> },
    /// 登录页 `/auth`
    Auth,
    /// 未知路径
    NotFound { path: String },
}

impl Route {
    /// 解析路径，忽略查询串、锚点和末尾的斜杠
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/blog" => Route::Blog,
            "/auth" => Route::Auth,
            _ => match trimmed.strip_prefix("/blog/") {
                Some(param) if !param.contains('/') => Route::BlogPost { id: parse_leading_id(param) },
                _ => Route::NotFound { path: path.to_string() },
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost { id: Some(id) } => format!("/blog/{}", id),
            Route::BlogPost { id: None } => "/blog/0".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn post(id: PostId) -> Route {
        Route::BlogPost { id: Some(id) }
    }
}

/// 与浏览器 parseInt 一致：跳过开头空白和一个可选的 `+`，取之后的十进制数字
fn parse_leading_id(param: &str) -> Option<PostId> {
    let param = param.trim_start();
    let param = param.strip_prefix('+').unwrap_or(param);
    let end = param.find(|c: char| !c.is_ascii_digit()).unwrap_or(param.len());
    param[..end].parse().ok()
}
