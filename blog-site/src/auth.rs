use thiserror::Error;
use tracing::{debug, warn};

use crate::routes::Route;

/// 认证会话 - 由外部认证服务返回，站点内不解析其内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub access_token: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("认证服务不可用")]
    Unavailable,

    #[error("认证服务返回错误: {0}")]
    Provider(String),
}

/// 外部认证服务
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    /// 获取当前会话，未登录时返回 None
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// 认证状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated { session: Session },
    Anonymous,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated { session } => Some(session),
            AuthState::Anonymous => None,
        }
    }
}

impl From<Option<Session>> for AuthState {
    fn from(session: Option<Session>) -> Self {
        match session {
            Some(session) => AuthState::Authenticated { session },
            None => AuthState::Anonymous,
        }
    }
}

/// 视图挂载时获取一次会话；获取失败按未登录处理
pub async fn resolve_auth_state<P: AuthProvider>(provider: &P) -> AuthState {
    match provider.get_session().await {
        Ok(session) => {
            let state = AuthState::from(session);
            debug!(authenticated = state.is_authenticated(), "会话已解析");
            state
        }
        Err(e) => {
            warn!(error = %e, "获取会话失败，按未登录处理");
            AuthState::Anonymous
        }
    }
}

/// 退出登录，成功后返回未登录状态
pub async fn sign_out<P: AuthProvider>(provider: &P) -> Result<AuthState, AuthError> {
    provider.sign_out().await?;
    Ok(AuthState::Anonymous)
}

/// 登录表单模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

/// 登录页挂载后的跳转决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRedirect {
    /// 留在登录页
    Stay,
    /// 跳转到指定路由
    Redirect(Route),
}

/// 登录页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPage {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub mode: AuthMode,
}

impl AuthPage {
    pub fn new() -> Self {
        Self {
            heading: "BlogPlatform",
            subheading: "Admin Access",
            mode: AuthMode::Login,
        }
    }

    /// 已登录用户直接回到首页
    pub fn on_mount(&self, state: &AuthState) -> AuthRedirect {
        if state.is_authenticated() {
            AuthRedirect::Redirect(Route::Home)
        } else {
            AuthRedirect::Stay
        }
    }

    /// 登录成功后回到首页
    pub fn on_auth_success(&self) -> Route {
        Route::Home
    }
}

impl Default for AuthPage {
    fn default() -> Self {
        Self::new()
    }
}
