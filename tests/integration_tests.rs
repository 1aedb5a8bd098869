use quill::db::pagination::{Order, PaginationOpts};
use quill::models::{CreatePost, CreateTerm, PostStatus, TermKind, UpdatePost, UpdateTerm};
use quill::services::filters::PostFilters;
use quill::services::posts::{self, ListPosts};
use quill::services::seed;
use quill::services::terms::{self, ListTerms, OrderBy};
use quill::{Database, Error};
use rand::Rng;

fn create_test_db() -> Database {
    let name = format!("test_db_{}", rand::thread_rng().gen::<u64>());
    let db = Database::open_memory(&name).expect("open in-memory database");
    db.migrate().expect("run migrations");
    db
}

fn new_post(title: &str, slug: &str, status: PostStatus) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        body: format!("Body of {title}."),
        slug: slug.to_string(),
        status,
        categories: Vec::new(),
        tags: Vec::new(),
    }
}

fn new_term(name: &str, slug: &str) -> CreateTerm {
    CreateTerm {
        name: name.to_string(),
        slug: slug.to_string(),
        description: None,
    }
}

mod slug_guard_tests {
    use super::*;

    #[test]
    fn test_duplicate_post_slug_rejected() {
        let db = create_test_db();
        posts::create_post(&db, new_post("First", "shared", PostStatus::Published)).unwrap();

        let err = posts::create_post(&db, new_post("Second", "shared", PostStatus::Published))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateSlug { kind: "post", ref slug } if slug == "shared"
        ));
    }

    #[test]
    fn test_update_keeping_own_slug_succeeds() {
        let db = create_test_db();
        let id = posts::create_post(&db, new_post("Mine", "mine", PostStatus::Draft)).unwrap();

        posts::update_post(
            &db,
            id,
            UpdatePost {
                slug: Some("mine".to_string()),
                title: Some("Mine, renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let fetched = posts::get_post_by_slug(&db, "mine").unwrap().unwrap();
        assert_eq!(fetched.title, "Mine, renamed");
    }

    #[test]
    fn test_update_to_foreign_slug_rejected() {
        let db = create_test_db();
        posts::create_post(&db, new_post("Taken", "taken", PostStatus::Published)).unwrap();
        let id = posts::create_post(&db, new_post("Other", "other", PostStatus::Published)).unwrap();

        let err = posts::update_post(
            &db,
            id,
            UpdatePost {
                slug: Some("taken".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug { .. }));
    }

    #[test]
    fn test_invalid_slug_rejected() {
        let db = create_test_db();
        let err = posts::create_post(&db, new_post("Bad", "Not A Slug", PostStatus::Draft))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSlug { .. }));
    }

    #[test]
    fn test_term_slug_guard_applies_per_collection() {
        let db = create_test_db();
        terms::create_term(&db, TermKind::Category, new_term("News", "news")).unwrap();

        let err = terms::create_term(&db, TermKind::Category, new_term("News 2", "news"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateSlug { kind: "category", ref slug } if slug == "news"
        ));

        // same slug in the other collection is fine
        terms::create_term(&db, TermKind::Tag, new_term("News", "news")).unwrap();
    }

    #[test]
    fn test_term_update_slug_guard() {
        let db = create_test_db();
        terms::create_term(&db, TermKind::Tag, new_term("Rust", "rust")).unwrap();
        let id = terms::create_term(&db, TermKind::Tag, new_term("Tokio", "tokio")).unwrap();

        let err = terms::update_term(
            &db,
            TermKind::Tag,
            id,
            UpdateTerm {
                slug: Some("rust".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateSlug { kind: "tag", .. }));

        // keeping its own slug while renaming is not a conflict
        terms::update_term(
            &db,
            TermKind::Tag,
            id,
            UpdateTerm {
                name: Some("Tokio Runtime".to_string()),
                slug: Some("tokio".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    }
}

mod post_listing_tests {
    use super::*;

    #[test]
    fn test_listing_defaults_to_published() {
        let db = create_test_db();
        posts::create_post(&db, new_post("Live", "live", PostStatus::Published)).unwrap();
        posts::create_post(&db, new_post("WIP", "wip", PostStatus::Draft)).unwrap();

        let page = posts::list_posts(&db, ListPosts::default()).unwrap();
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "live");

        let drafts = posts::list_posts(
            &db,
            ListPosts {
                status: Some(PostStatus::Draft),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(drafts.page.len(), 1);
        assert_eq!(drafts.page[0].slug, "wip");
    }

    #[test]
    fn test_any_of_category_filter() {
        let db = create_test_db();
        let a = terms::create_term(&db, TermKind::Category, new_term("A", "a")).unwrap();
        let b = terms::create_term(&db, TermKind::Category, new_term("B", "b")).unwrap();
        let c = terms::create_term(&db, TermKind::Category, new_term("C", "c")).unwrap();

        let mut p1 = new_post("One", "one", PostStatus::Published);
        p1.categories = vec![a, b];
        posts::create_post(&db, p1).unwrap();
        let mut p2 = new_post("Two", "two", PostStatus::Published);
        p2.categories = vec![c];
        posts::create_post(&db, p2).unwrap();

        // any shared id is a match
        let page = posts::list_posts(
            &db,
            ListPosts {
                filters: PostFilters {
                    categories: Some(vec![b, c]),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.page.len(), 2);

        let page = posts::list_posts(
            &db,
            ListPosts {
                filters: PostFilters {
                    categories_exclude: Some(vec![b]),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "two");
    }

    #[test]
    fn test_present_but_empty_inclusion_matches_nothing() {
        let db = create_test_db();
        posts::create_post(&db, new_post("One", "one", PostStatus::Published)).unwrap();

        let page = posts::list_posts(
            &db,
            ListPosts {
                filters: PostFilters {
                    include: Some(Vec::new()),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .unwrap();
        assert!(page.page.is_empty());
    }

    #[test]
    fn test_month_filter_buckets_on_published_at() {
        let db = create_test_db();
        let oct =
            posts::create_post(&db, new_post("October", "october", PostStatus::Published)).unwrap();
        let nov =
            posts::create_post(&db, new_post("November", "november", PostStatus::Published))
                .unwrap();

        posts::update_post(
            &db,
            oct,
            UpdatePost {
                published_at: Some("2024-10-31T23:59:59".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        posts::update_post(
            &db,
            nov,
            UpdatePost {
                published_at: Some("2024-11-01T00:00:00Z".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let month = |token: &str| {
            posts::list_posts(
                &db,
                ListPosts {
                    filters: PostFilters {
                        month_year: Some(token.to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .unwrap()
        };

        let page = month("2024-10");
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "october");

        let page = month("2024-11");
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "november");

        assert!(month("2024-09").page.is_empty());
        assert!(month("nonsense").page.is_empty());
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn test_cursor_walk_visits_every_post_once() {
        let db = create_test_db();
        for n in 0..25 {
            posts::create_post(&db, new_post(&format!("Post {n}"), &format!("post-{n}"), PostStatus::Published))
                .unwrap();
        }
        // drafts must not leak into the walk
        posts::create_post(&db, new_post("Hidden", "hidden", PostStatus::Draft)).unwrap();

        let mut seen = Vec::new();
        let mut cursor = None;
        let mut pages = 0;
        loop {
            let page = posts::list_posts(
                &db,
                ListPosts {
                    pagination: PaginationOpts { num_items: 10, cursor: cursor.take() },
                    ..Default::default()
                },
            )
            .unwrap();
            pages += 1;
            seen.extend(page.page.iter().map(|p| p.id));
            if page.is_done {
                assert!(page.continue_cursor.is_none());
                break;
            }
            cursor = Some(page.continue_cursor.expect("cursor while not done"));
        }

        assert_eq!(pages, 3);
        assert_eq!(seen.len(), 25);
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 25);
        // default order is newest first
        assert!(seen.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_ascending_order_walk() {
        let db = create_test_db();
        for n in 0..12 {
            posts::create_post(&db, new_post(&format!("Post {n}"), &format!("post-{n}"), PostStatus::Published))
                .unwrap();
        }

        let first = posts::list_posts(
            &db,
            ListPosts {
                pagination: PaginationOpts { num_items: 5, cursor: None },
                order: Some(Order::Asc),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(first.page.len(), 5);
        assert!(first.page.windows(2).all(|w| w[0].id < w[1].id));
        assert!(!first.is_done);

        let second = posts::list_posts(
            &db,
            ListPosts {
                pagination: PaginationOpts { num_items: 5, cursor: first.continue_cursor },
                order: Some(Order::Asc),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(second.page[0].id > first.page[4].id);
    }

    #[test]
    fn test_term_walk_is_name_ordered() {
        let db = create_test_db();
        for name in ["Zig", "Ada", "Mint", "Brew", "Kiln", "Quay", "Echo"] {
            terms::create_term(
                &db,
                TermKind::Category,
                new_term(name, &name.to_lowercase()),
            )
            .unwrap();
        }

        let mut names = Vec::new();
        let mut cursor = None;
        loop {
            let page = terms::list_terms(
                &db,
                TermKind::Category,
                ListTerms {
                    pagination: PaginationOpts { num_items: 3, cursor: cursor.take() },
                    ..Default::default()
                },
            )
            .unwrap();
            names.extend(page.page.iter().map(|t| t.term.name.clone()));
            if page.is_done {
                break;
            }
            cursor = Some(page.continue_cursor.unwrap());
        }

        assert_eq!(names, ["Ada", "Brew", "Echo", "Kiln", "Mint", "Quay", "Zig"]);
    }

    #[test]
    fn test_malformed_cursor_is_an_error() {
        let db = create_test_db();
        posts::create_post(&db, new_post("One", "one", PostStatus::Published)).unwrap();

        let err = posts::list_posts(
            &db,
            ListPosts {
                pagination: PaginationOpts {
                    num_items: 10,
                    cursor: Some("not-a-cursor".to_string()),
                },
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCursor));
    }
}

mod term_count_tests {
    use super::*;

    #[test]
    fn test_counts_track_published_posts_only() {
        let db = create_test_db();
        let alpha = terms::create_term(&db, TermKind::Category, new_term("Alpha", "alpha")).unwrap();
        let beta = terms::create_term(&db, TermKind::Category, new_term("Beta", "beta")).unwrap();

        let mut p1 = new_post("One", "one", PostStatus::Published);
        p1.categories = vec![alpha];
        posts::create_post(&db, p1).unwrap();
        let mut p2 = new_post("Two", "two", PostStatus::Published);
        p2.categories = vec![alpha, beta];
        posts::create_post(&db, p2).unwrap();
        let mut draft = new_post("Three", "three", PostStatus::Draft);
        draft.categories = vec![beta];
        posts::create_post(&db, draft).unwrap();

        let page = terms::list_terms(&db, TermKind::Category, ListTerms::default()).unwrap();
        assert_eq!(page.page.len(), 2);
        assert_eq!(page.page[0].term.name, "Alpha");
        assert_eq!(page.page[0].count, 2);
        assert_eq!(page.page[1].term.name, "Beta");
        assert_eq!(page.page[1].count, 1);
    }

    #[test]
    fn test_hide_empty_and_id_filters() {
        let db = create_test_db();
        let used = terms::create_term(&db, TermKind::Tag, new_term("Used", "used")).unwrap();
        let unused = terms::create_term(&db, TermKind::Tag, new_term("Unused", "unused")).unwrap();

        let mut post = new_post("One", "one", PostStatus::Published);
        post.tags = vec![used];
        posts::create_post(&db, post).unwrap();

        let page = terms::list_terms(
            &db,
            TermKind::Tag,
            ListTerms {
                hide_empty: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].term.id, used);

        let page = terms::list_terms(
            &db,
            TermKind::Tag,
            ListTerms {
                exclude: Some(vec![used]),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].term.id, unused);

        let page = terms::list_terms(
            &db,
            TermKind::Tag,
            ListTerms {
                include: Some(Vec::new()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(page.page.is_empty());
    }

    #[test]
    fn test_order_by_count_is_stable_on_ties() {
        let db = create_test_db();
        let alpha = terms::create_term(&db, TermKind::Category, new_term("Alpha", "alpha")).unwrap();
        let beta = terms::create_term(&db, TermKind::Category, new_term("Beta", "beta")).unwrap();
        let gamma = terms::create_term(&db, TermKind::Category, new_term("Gamma", "gamma")).unwrap();
        terms::create_term(&db, TermKind::Category, new_term("Delta", "delta")).unwrap();

        for (n, cats) in [vec![alpha], vec![beta], vec![gamma], vec![gamma]]
            .into_iter()
            .enumerate()
        {
            let mut post = new_post(&format!("P{n}"), &format!("p-{n}"), PostStatus::Published);
            post.categories = cats;
            posts::create_post(&db, post).unwrap();
        }

        let names = |order| {
            terms::list_terms(
                &db,
                TermKind::Category,
                ListTerms {
                    orderby: Some(OrderBy::Count),
                    order: Some(order),
                    ..Default::default()
                },
            )
            .unwrap()
            .page
            .into_iter()
            .map(|t| (t.term.name, t.count))
            .collect::<Vec<_>>()
        };

        // ties keep the name-ordered scan position
        assert_eq!(
            names(Order::Asc),
            [
                ("Delta".to_string(), 0),
                ("Alpha".to_string(), 1),
                ("Beta".to_string(), 1),
                ("Gamma".to_string(), 2),
            ]
        );
        assert_eq!(
            names(Order::Desc),
            [
                ("Gamma".to_string(), 2),
                ("Alpha".to_string(), 1),
                ("Beta".to_string(), 1),
                ("Delta".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_get_term_by_slug_carries_count() {
        let db = create_test_db();
        let id = terms::create_term(&db, TermKind::Tag, new_term("Rust", "rust")).unwrap();
        let mut post = new_post("One", "one", PostStatus::Published);
        post.tags = vec![id];
        posts::create_post(&db, post).unwrap();

        let tag = terms::get_term_by_slug(&db, TermKind::Tag, "rust").unwrap().unwrap();
        assert_eq!(tag.term.id, id);
        assert_eq!(tag.count, 1);

        assert!(terms::get_term_by_slug(&db, TermKind::Tag, "absent").unwrap().is_none());
    }
}

mod dangling_reference_tests {
    use super::*;

    #[test]
    fn test_deleted_term_is_dropped_on_resolution() {
        let db = create_test_db();
        let keep = terms::create_term(&db, TermKind::Category, new_term("Keep", "keep")).unwrap();
        let gone = terms::create_term(&db, TermKind::Category, new_term("Gone", "gone")).unwrap();
        let tag = terms::create_term(&db, TermKind::Tag, new_term("Tag", "tag")).unwrap();

        let mut post = new_post("One", "one", PostStatus::Published);
        post.categories = vec![keep, gone];
        post.tags = vec![tag];
        posts::create_post(&db, post).unwrap();

        terms::delete_term(&db, TermKind::Category, gone).unwrap();

        let fetched = posts::get_post_by_slug(&db, "one").unwrap().unwrap();
        assert_eq!(fetched.categories.len(), 1);
        assert_eq!(fetched.categories[0].id, keep);
        assert_eq!(fetched.tags.len(), 1);
    }

    #[test]
    fn test_dangling_ids_do_not_break_counts() {
        let db = create_test_db();
        let gone = terms::create_term(&db, TermKind::Tag, new_term("Gone", "gone")).unwrap();
        let live = terms::create_term(&db, TermKind::Tag, new_term("Live", "live")).unwrap();

        let mut post = new_post("One", "one", PostStatus::Published);
        post.tags = vec![gone, live];
        posts::create_post(&db, post).unwrap();
        terms::delete_term(&db, TermKind::Tag, gone).unwrap();

        let page = terms::list_terms(&db, TermKind::Tag, ListTerms::default()).unwrap();
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].count, 1);
    }
}

mod search_tests {
    use super::*;

    fn search(db: &Database, query: &str, num_items: usize, cursor: Option<String>) -> quill::db::pagination::Page<quill::models::Post> {
        posts::list_posts(
            db,
            ListPosts {
                pagination: PaginationOpts { num_items, cursor },
                search: Some(query.to_string()),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_search_matches_title_words() {
        let db = create_test_db();
        posts::create_post(&db, new_post("Async traits landed", "p1", PostStatus::Published))
            .unwrap();
        posts::create_post(&db, new_post("Borrow checker tips", "p2", PostStatus::Published))
            .unwrap();

        let page = search(&db, "traits", 10, None);
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "p1");

        assert!(search(&db, "nomatch", 10, None).page.is_empty());
    }

    #[test]
    fn test_search_skips_drafts_by_default() {
        let db = create_test_db();
        posts::create_post(&db, new_post("Ferris rises", "live", PostStatus::Published)).unwrap();
        posts::create_post(&db, new_post("Ferris drafts", "wip", PostStatus::Draft)).unwrap();

        let page = search(&db, "ferris", 10, None);
        assert_eq!(page.page.len(), 1);
        assert_eq!(page.page[0].slug, "live");

        let drafts = posts::list_posts(
            &db,
            ListPosts {
                search: Some("ferris".to_string()),
                status: Some(PostStatus::Draft),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(drafts.page.len(), 1);
        assert_eq!(drafts.page[0].slug, "wip");
    }

    #[test]
    fn test_search_pages_by_offset() {
        let db = create_test_db();
        for n in 0..7 {
            posts::create_post(
                &db,
                new_post(&format!("Ferris update {n}"), &format!("f-{n}"), PostStatus::Published),
            )
            .unwrap();
        }

        let first = search(&db, "ferris", 3, None);
        assert_eq!(first.page.len(), 3);
        assert!(!first.is_done);

        let second = search(&db, "ferris", 3, first.continue_cursor);
        assert_eq!(second.page.len(), 3);
        assert!(!second.is_done);

        let third = search(&db, "ferris", 3, second.continue_cursor);
        assert_eq!(third.page.len(), 1);
        assert!(third.is_done);
        assert!(third.continue_cursor.is_none());
    }

    #[test]
    fn test_search_cursor_must_be_numeric() {
        let db = create_test_db();
        posts::create_post(&db, new_post("Ferris", "f", PostStatus::Published)).unwrap();

        let err = posts::list_posts(
            &db,
            ListPosts {
                pagination: PaginationOpts {
                    num_items: 10,
                    cursor: Some("garbage".to_string()),
                },
                search: Some("ferris".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidCursor));
    }

    #[test]
    fn test_deleted_post_leaves_the_index() {
        let db = create_test_db();
        let id = posts::create_post(&db, new_post("Ephemeral note", "e", PostStatus::Published))
            .unwrap();
        assert_eq!(search(&db, "ephemeral", 10, None).page.len(), 1);

        posts::delete_post(&db, id).unwrap();
        assert!(search(&db, "ephemeral", 10, None).page.is_empty());
    }

    #[test]
    fn test_retitled_post_is_reindexed() {
        let db = create_test_db();
        let id = posts::create_post(&db, new_post("Old headline", "r", PostStatus::Published))
            .unwrap();

        posts::update_post(
            &db,
            id,
            UpdatePost {
                title: Some("Fresh headline".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert!(search(&db, "old", 10, None).page.is_empty());
        assert_eq!(search(&db, "fresh", 10, None).page.len(), 1);
    }
}

mod crud_tests {
    use super::*;

    #[test]
    fn test_partial_update_touches_only_given_fields() {
        let db = create_test_db();
        let mut input = new_post("Original", "orig", PostStatus::Draft);
        input.body = "original body".to_string();
        let id = posts::create_post(&db, input).unwrap();

        posts::update_post(
            &db,
            id,
            UpdatePost {
                status: Some(PostStatus::Published),
                ..Default::default()
            },
        )
        .unwrap();

        let fetched = posts::get_post_by_slug(&db, "orig").unwrap().unwrap();
        assert_eq!(fetched.status, PostStatus::Published);
        assert_eq!(fetched.title, "Original");
        assert_eq!(fetched.body, "original body");
    }

    #[test]
    fn test_empty_patch_is_a_no_op() {
        let db = create_test_db();
        let id = posts::create_post(&db, new_post("Still", "still", PostStatus::Draft)).unwrap();
        posts::update_post(&db, id, UpdatePost::default()).unwrap();
        assert!(posts::get_post_by_slug(&db, "still").unwrap().is_some());
    }

    #[test]
    fn test_get_by_slug_absent_is_none() {
        let db = create_test_db();
        assert!(posts::get_post_by_slug(&db, "nothing").unwrap().is_none());
    }

    #[test]
    fn test_delete_post() {
        let db = create_test_db();
        let id = posts::create_post(&db, new_post("Doomed", "doomed", PostStatus::Published))
            .unwrap();
        posts::delete_post(&db, id).unwrap();
        assert!(posts::get_post_by_slug(&db, "doomed").unwrap().is_none());
    }
}

mod storage_tests {
    use super::*;

    #[test]
    fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::open(path, 2).unwrap();
            db.migrate().unwrap();
            posts::create_post(&db, new_post("Durable", "durable", PostStatus::Published))
                .unwrap();
        }

        let db = Database::open(path, 2).unwrap();
        db.migrate().unwrap();
        let fetched = posts::get_post_by_slug(&db, "durable").unwrap();
        assert_eq!(fetched.unwrap().title, "Durable");
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let db = create_test_db();
        db.migrate().unwrap();
        db.migrate().unwrap();
        posts::create_post(&db, new_post("Fine", "fine", PostStatus::Published)).unwrap();
    }
}

mod seed_tests {
    use super::*;

    #[test]
    fn test_count_bounds_enforced() {
        let db = create_test_db();
        assert!(matches!(
            seed::generate_posts(&db, 0),
            Err(Error::CountOutOfRange { requested: 0, .. })
        ));
        assert!(matches!(
            seed::generate_posts(&db, 1001),
            Err(Error::CountOutOfRange { requested: 1001, .. })
        ));
        assert!(matches!(
            seed::generate_terms(&db, TermKind::Tag, -3),
            Err(Error::CountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_posts_require_terms_to_assign() {
        let db = create_test_db();
        assert!(matches!(
            seed::generate_posts(&db, 5),
            Err(Error::NoTermsToAssign)
        ));
    }

    #[test]
    fn test_generates_requested_number() {
        let db = create_test_db();
        assert_eq!(seed::generate_terms(&db, TermKind::Category, 4).unwrap(), 4);
        assert_eq!(seed::generate_terms(&db, TermKind::Tag, 3).unwrap(), 3);
        assert_eq!(seed::generate_posts(&db, 20).unwrap(), 20);

        let mut total = 0;
        for status in [PostStatus::Published, PostStatus::Draft] {
            total += posts::list_posts(
                &db,
                ListPosts {
                    pagination: PaginationOpts { num_items: 100, cursor: None },
                    status: Some(status),
                    ..Default::default()
                },
            )
            .unwrap()
            .page
            .len();
        }
        assert_eq!(total, 20);
    }
}
