pub mod auth;
pub mod routes;
pub mod share;
pub mod views;

pub use auth::{resolve_auth_state, sign_out, AuthError, AuthMode, AuthPage, AuthProvider, AuthRedirect, AuthState, Session};
pub use routes::Route;
pub use share::{share_post, Notice, ShareError, ShareOutcome, SharePlatform, ShareRequest};
pub use views::{BlogListing, LandingPage, Navbar, Page, PostCard, PostDetail, SiteContext, NO_MATCHES_MESSAGE};
