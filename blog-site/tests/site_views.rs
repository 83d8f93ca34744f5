use blog_site::views::POST_NOT_FOUND;
use blog_site::{AuthRedirect, AuthState, Session, BlogListing, Page, PostDetail, Route, SiteContext, NO_MATCHES_MESSAGE};
use post_filter::{FilterState, PostCatalog};

fn context() -> SiteContext {
    SiteContext::new(PostCatalog::sample(), AuthState::Anonymous)
}

fn listing_ids(listing: &BlogListing<'_>) -> Vec<u32> {
    listing
        .featured
        .iter()
        .chain(listing.remainder.iter())
        .map(|card| card.post.id)
        .collect()
}

#[test]
fn listing_without_filters_features_first_post() {
    let catalog = PostCatalog::sample();
    let listing = BlogListing::build(&catalog, &FilterState::new());

    assert_eq!(listing.featured.as_ref().map(|card| card.post.id), Some(1));
    assert_eq!(listing.remainder.iter().map(|card| card.post.id).collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(listing.total(), 3);
    assert_eq!(listing.empty_message(), None);

    let chips: Vec<&str> = listing.tag_chips.iter().map(|chip| chip.label.as_str()).collect();
    assert_eq!(chips[0], "All");
    assert_eq!(chips.len(), 10);
    assert!(listing.tag_chips[0].active);
    assert!(listing.tag_chips[1..].iter().all(|chip| !chip.active));
}

#[test]
fn listing_follows_filter_state() {
    let catalog = PostCatalog::sample();
    let mut state = FilterState::new();

    state.select_tag("SQL");
    let listing = BlogListing::build(&catalog, &state);
    assert_eq!(listing_ids(&listing), vec![3]);
    assert!(listing.remainder.is_empty());
    let active: Vec<&str> = listing
        .tag_chips
        .iter()
        .filter(|chip| chip.active)
        .map(|chip| chip.label.as_str())
        .collect();
    assert_eq!(active, vec!["SQL"]);

    state.clear_tag();
    state.set_search_term("TAILWIND");
    let listing = BlogListing::build(&catalog, &state);
    assert_eq!(listing_ids(&listing), vec![2]);
    assert_eq!(listing.search_term, "TAILWIND");
}

#[test]
fn empty_listing_shows_message() {
    let catalog = PostCatalog::sample();
    let mut state = FilterState::new();
    state.set_search_term("xyz");
    let listing = BlogListing::build(&catalog, &state);

    assert!(listing.is_empty());
    assert_eq!(listing.total(), 0);
    assert_eq!(listing.empty_message(), Some(NO_MATCHES_MESSAGE));
    // 标签按钮不受筛选结果影响
    assert_eq!(listing.tag_chips.len(), 10);
}

#[test]
fn render_resolves_every_route() {
    let ctx = context();
    let state = FilterState::new();

    assert!(matches!(ctx.render(&Route::parse("/"), &state), Page::Landing(_)));
    assert!(matches!(ctx.render(&Route::parse("/blog"), &state), Page::Listing(_)));
    assert!(matches!(ctx.render(&Route::parse("/auth"), &state), Page::Auth(_)));
    assert_eq!(
        ctx.render(&Route::parse("/pricing"), &state),
        Page::NotFound { path: "/pricing".to_string() }
    );

    match ctx.render(&Route::parse("/blog/2"), &state) {
        Page::Detail(PostDetail::Found(card)) => {
            assert_eq!(card.post.title, "Building Modern UIs with Tailwind CSS");
            assert_eq!(card.date, "1/12/2024");
        }
        other => panic!("unexpected page: {:?}", other),
    }
}

#[test]
fn missing_post_renders_not_found_with_back_link() {
    let ctx = context();
    let state = FilterState::new();

    for path in ["/blog/42", "/blog/0", "/blog/abc"] {
        match ctx.render(&Route::parse(path), &state) {
            Page::Detail(detail) => {
                assert!(!detail.is_found(), "{}", path);
                assert_eq!(detail, PostDetail::NotFound(POST_NOT_FOUND));
            }
            other => panic!("unexpected page for {}: {:?}", path, other),
        }
    }
    assert_eq!(POST_NOT_FOUND.back, Route::Blog);
    assert_eq!(POST_NOT_FOUND.title, "Post Not Found");
}

#[test]
fn every_catalog_post_has_a_detail_page() {
    let ctx = context();
    let state = FilterState::new();
    for post in ctx.catalog.posts() {
        let route = Route::parse(&format!("/blog/{}", post.id));
        match ctx.render(&route, &state) {
            Page::Detail(PostDetail::Found(card)) => assert_eq!(card.post, post),
            other => panic!("unexpected page: {:?}", other),
        }
    }
}

#[test]
fn auth_redirect_depends_on_context_session() {
    assert_eq!(context().auth_redirect(), AuthRedirect::Stay);

    let session = Session {
        user_id: "user-1".to_string(),
        access_token: "token".to_string(),
    };
    let ctx = SiteContext::new(PostCatalog::sample(), AuthState::Authenticated { session });
    assert_eq!(ctx.auth_redirect(), AuthRedirect::Redirect(Route::Home));
}
