//! End-to-end feed behavior through the public reducer and view surface.

mod common;

use common::{ids, numbered_posts, sample_posts};
use postboard::models::Post;
use postboard::state::{reduce, CategoryFilter, FeedAction, FeedState};
use postboard::view_state::{distinct_categories, filter_by_category};

fn load(posts: Vec<Post>) -> FeedState {
    reduce(FeedState::new(), FeedAction::DataLoaded(posts))
}

#[test]
fn test_categories_and_filter_from_loaded_posts() {
    let posts = vec![
        Post::new("1", "", "", "tech"),
        Post::new("2", "", "", "life"),
        Post::new("3", "", "", "tech"),
    ];

    assert_eq!(distinct_categories(&posts), vec!["tech", "life"]);

    let tech = filter_by_category(&posts, &CategoryFilter::from_value("tech"));
    assert_eq!(ids(tech), vec!["1", "3"]);
}

#[test]
fn test_pagination_through_twelve_posts() {
    let posts: Vec<Post> = (1..=12)
        .map(|i| Post::new(i.to_string(), "", "", "x"))
        .collect();
    let mut state = load(posts);

    let view = state.view();
    assert_eq!(view.visible.len(), 5);
    assert!(view.has_more);

    state = reduce(state, FeedAction::LoadMore);
    let view = state.view();
    assert_eq!(view.visible.len(), 10);
    assert!(view.has_more);

    state = reduce(state, FeedAction::LoadMore);
    let view = state.view();
    assert_eq!(view.visible.len(), 12);
    assert!(!view.has_more);
}

#[test]
fn test_category_change_keeps_visible_count() {
    let mut state = load(numbered_posts(14));
    state = reduce(state, FeedAction::LoadMore);
    assert_eq!(state.cursor().visible_count(), 10);

    state = reduce(state, FeedAction::SelectCategory("y".to_string()));

    assert_eq!(state.cursor().visible_count(), 10);
    let view = state.view();
    // 7 "y" posts, all shown because 10 > 7
    assert_eq!(view.visible.len(), 7);
    assert!(!view.has_more);
    assert_eq!(ids(view.visible.iter().copied()), vec!["2", "4", "6", "8", "10", "12", "14"]);
}

#[test]
fn test_never_loaded_renders_nothing() {
    let state = FeedState::new();
    let view = state.view();

    assert!(view.categories.is_empty());
    assert!(view.visible.is_empty());
    assert!(!view.has_more);
    assert!(!view.loaded);
}

#[test]
fn test_actions_before_load_are_harmless() {
    let mut state = FeedState::new();
    state.dispatch(FeedAction::SelectCategory("a".to_string()));
    state.dispatch(FeedAction::LoadMore);

    let view = state.view();
    assert!(view.visible.is_empty());
    assert!(!view.has_more);

    // Selection made before load applies once data arrives
    state.dispatch(FeedAction::DataLoaded(sample_posts()));
    assert_eq!(ids(state.view().visible.iter().copied()), vec!["1", "3", "5"]);
}

#[test]
fn test_all_categories_restores_full_list() {
    let mut state = load(sample_posts());
    state.dispatch(FeedAction::SelectCategory("b".to_string()));
    assert_eq!(state.view().visible.len(), 2);

    state.dispatch(FeedAction::SelectCategory(String::new()));
    assert_eq!(state.selected(), &CategoryFilter::All);
    assert_eq!(ids(state.view().visible.iter().copied()), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_visible_is_prefix_of_filtered() {
    let mut state = load(numbered_posts(23));
    for category in ["", "x", "y"] {
        state.dispatch(FeedAction::SelectCategory(category.to_string()));
        for _ in 0..4 {
            let filtered = filter_by_category(state.posts().current(), state.selected());
            let view = state.view();

            assert!(view.visible.len() <= filtered.len());
            assert_eq!(view.visible[..], filtered[..view.visible.len()]);
            assert_eq!(view.has_more, state.cursor().visible_count() < filtered.len());
            assert_eq!(view.matching, filtered.len());

            state.dispatch(FeedAction::LoadMore);
        }
    }
}
