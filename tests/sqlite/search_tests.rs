//! Title search tests for the SQLite task repository.

use crate::sqlite::helpers::{SqliteContext, new_task, sqlite_context};
use rstest::rstest;
use taskql::task::{domain::TaskFilter, ports::TaskRepository};

async fn seed(context: &SqliteContext, titles: &[&str]) {
    for title in titles {
        context
            .repository
            .store(&new_task(title))
            .await
            .expect("store task");
    }
}

async fn titles_matching(context: &SqliteContext, filter: &TaskFilter) -> Vec<String> {
    let mut titles: Vec<String> = context
        .repository
        .list(filter)
        .await
        .expect("list tasks")
        .into_iter()
        .map(|task| task.title().to_string())
        .collect();
    titles.sort();
    titles
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_without_filter_returns_everything(sqlite_context: SqliteContext) {
    seed(&sqlite_context, &["One", "Two", "Three"]).await;

    let titles = titles_matching(&sqlite_context, &TaskFilter::all()).await;

    assert_eq!(titles, vec!["One", "Three", "Two"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_on_empty_store_is_empty(sqlite_context: SqliteContext) {
    let titles = titles_matching(&sqlite_context, &TaskFilter::title_contains("x")).await;
    assert!(titles.is_empty());
}

#[rstest]
#[case("foo", &["Buy FOOD", "Refoot table", "foo fighters"])]
#[case("FOO", &["Buy FOOD", "Refoot table", "foo fighters"])]
#[case("table", &["Refoot table"])]
#[case("zzz", &[])]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_substring_ignoring_case(
    sqlite_context: SqliteContext,
    #[case] search: &str,
    #[case] expected: &[&str],
) {
    seed(&sqlite_context, &["Buy FOOD", "foo fighters", "Laundry", "Refoot table"]).await;

    let titles = titles_matching(&sqlite_context, &TaskFilter::title_contains(search)).await;

    assert_eq!(titles, expected);
}

#[rstest]
#[case("%", &["100% done"])]
#[case("_", &["snake_case"])]
#[case("\\", &["back\\slash"])]
#[tokio::test(flavor = "multi_thread")]
async fn search_treats_wildcards_literally(
    sqlite_context: SqliteContext,
    #[case] search: &str,
    #[case] expected: &[&str],
) {
    seed(
        &sqlite_context,
        &["100% done", "100 percent", "snake_case", "snakecase", "back\\slash"],
    )
    .await;

    let titles = titles_matching(&sqlite_context, &TaskFilter::title_contains(search)).await;

    assert_eq!(titles, expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_folds_only_ascii_case(sqlite_context: SqliteContext) {
    seed(&sqlite_context, &["Äpfel kaufen", "äpfel schälen", "Birnen"]).await;

    let titles = titles_matching(&sqlite_context, &TaskFilter::title_contains("ÄPFEL")).await;

    assert_eq!(titles, vec!["Äpfel kaufen"]);
}
