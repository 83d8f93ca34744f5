use blog_common::Post;
use chrono::NaiveDate;
use post_filter::{
    derive_tags, filter_posts, find_by_id, lookup, select_featured, select_remainder, FilterState, PostCatalog,
    PostLookup,
};

fn post(id: u32, title: &str, excerpt: &str, tags: &[&str]) -> Post {
    Post {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: String::new(),
        author: "Jane Smith".to_string(),
        published_at: NaiveDate::from_ymd_opt(2024, 1, id).unwrap(),
        read_time: "8 min read".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover_image: format!("https://example.com/{}.jpg", id),
    }
}

fn two_posts() -> Vec<Post> {
    vec![
        post(1, "Getting Started with React and TypeScript", "", &["React", "TypeScript", "Web Development"]),
        post(2, "Building Modern UIs with Tailwind CSS", "", &["CSS", "Tailwind", "UI/UX"]),
    ]
}

fn wider_posts() -> Vec<Post> {
    let mut posts = two_posts();
    posts.push(post(3, "Database Design Best Practices", "Scalable schemas", &["Database", "SQL", "Backend"]));
    posts.push(post(4, "Styling without classes", "Plain css tricks", &["css"]));
    posts.push(post(5, "React state with hooks", "Managing state in React", &["React", "React"]));
    posts
}

fn ids(posts: &[&Post]) -> Vec<u32> {
    posts.iter().map(|p| p.id).collect()
}

const TERMS: &[&str] = &["", "react", "REACT", "css", "design", "xyz", "s", "Tailwind CSS"];
const TAGS: &[Option<&str>] = &[None, Some("React"), Some("CSS"), Some("css"), Some("SQL"), Some("Missing")];

#[test]
fn scenario_from_two_posts() {
    let posts = two_posts();
    assert_eq!(ids(&filter_posts(&posts, "tailwind", None)), vec![2]);
    assert_eq!(ids(&filter_posts(&posts, "", Some("React"))), vec![1]);
    assert!(filter_posts(&posts, "xyz", None).is_empty());
}

#[test]
fn empty_query_is_identity() {
    let posts = wider_posts();
    let all: Vec<&Post> = posts.iter().collect();
    assert_eq!(filter_posts(&posts, "", None), all);
}

#[test]
fn result_is_ordered_subset_without_duplicates() {
    let posts = wider_posts();
    for term in TERMS {
        for tag in TAGS {
            let result = ids(&filter_posts(&posts, term, *tag));
            let mut sorted = result.clone();
            sorted.sort_unstable();
            sorted.dedup();
            // 输入按id升序排列，所以结果必须严格递增
            assert_eq!(result, sorted, "term={:?} tag={:?}", term, tag);
            assert!(result.iter().all(|id| posts.iter().any(|p| p.id == *id)));
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let posts = wider_posts();
    for term in TERMS {
        for tag in TAGS {
            assert_eq!(filter_posts(&posts, term, *tag), filter_posts(&posts, term, *tag));
        }
    }
}

#[test]
fn text_match_ignores_case() {
    let posts = wider_posts();
    assert_eq!(filter_posts(&posts, "REACT", None), filter_posts(&posts, "react", None));
    assert_eq!(ids(&filter_posts(&posts, "ReAcT", None)), vec![1, 5]);
    // 摘要同样参与匹配
    assert_eq!(ids(&filter_posts(&posts, "SCHEMAS", None)), vec![3]);
}

#[test]
fn tag_match_is_exact_and_case_sensitive() {
    let posts = wider_posts();
    assert_eq!(ids(&filter_posts(&posts, "", Some("CSS"))), vec![2]);
    assert_eq!(ids(&filter_posts(&posts, "", Some("css"))), vec![4]);
    assert!(filter_posts(&posts, "", Some("Tail")).is_empty());
    assert!(filter_posts(&posts, "", Some("react")).is_empty());
}

#[test]
fn featured_and_remainder_partition_results() {
    let posts = wider_posts();
    for term in TERMS {
        for tag in TAGS {
            let filtered = filter_posts(&posts, term, *tag);
            let mut joined: Vec<&Post> = select_featured(&filtered).into_iter().copied().collect();
            joined.extend(select_remainder(&filtered).iter().copied());
            assert_eq!(joined, filtered);
        }
    }
}

#[test]
fn find_by_id_round_trips() {
    let posts = wider_posts();
    for p in &posts {
        assert_eq!(find_by_id(&posts, p.id), Some(p));
        assert_eq!(lookup(&posts, p.id), PostLookup::Found(p));
    }
    assert_eq!(find_by_id(&posts, 99), None);
    assert_eq!(lookup(&posts, 0), PostLookup::NotFound(0));
}

#[test]
fn tags_follow_first_seen_order() {
    let posts = wider_posts();
    assert_eq!(
        derive_tags(&posts),
        vec!["React", "TypeScript", "Web Development", "CSS", "Tailwind", "UI/UX", "Database", "SQL", "Backend", "css"]
    );
}

#[test]
fn sample_catalog_listing() {
    let catalog = PostCatalog::sample();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.tags().len(), 9);

    let mut state = FilterState::new();
    assert_eq!(catalog.filter(&state).len(), 3);

    state.set_search_term("design");
    assert_eq!(ids(&catalog.filter(&state)), vec![3]);

    state.set_search_term("");
    state.select_tag("TypeScript");
    assert_eq!(ids(&catalog.filter(&state)), vec![1]);

    assert!(catalog.lookup(2).is_found());
    assert!(!catalog.lookup(4).is_found());
}

#[test]
fn catalog_from_json_rejects_duplicates() {
    let json = serde_json::to_string(&vec![post(1, "a", "", &[]), post(1, "b", "", &[])]).unwrap();
    assert!(PostCatalog::from_json(&json).is_err());

    let json = serde_json::to_string(&two_posts()).unwrap();
    assert_eq!(PostCatalog::from_json(&json).unwrap().posts(), two_posts().as_slice());
}
