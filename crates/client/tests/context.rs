//! `CatalogContext` behaviour: session gating, local reconciliation after
//! each mutation, filtering, and stale-list handling.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use marquee_client::api::MovieApi;
use marquee_client::context::CatalogContext;
use marquee_client::error::ClientError;
use marquee_client::form::MovieForm;
use marquee_client::session::AdminCredentials;
use marquee_core::movie::MovieChanges;
use marquee_db::store::MovieStore;

async fn admin_context() -> (CatalogContext, Arc<dyn MovieStore>) {
    let (api, store) = common::spawn_in_memory().await;
    let mut ctx = CatalogContext::initialize(api, AdminCredentials::default()).await;
    assert!(ctx.login("admin", "admin123"));
    (ctx, store)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_with_default_credentials() {
    let mut ctx = CatalogContext::new(MovieApi::default(), AdminCredentials::default());

    assert!(ctx.login("admin", "admin123"));
    let user = ctx.user().unwrap();
    assert_eq!(user.username, "admin");
    assert!(user.is_admin);
    assert!(ctx.is_admin());
}

#[tokio::test]
async fn test_login_with_wrong_credentials_leaves_user_unset() {
    let mut ctx = CatalogContext::new(MovieApi::default(), AdminCredentials::default());

    assert!(!ctx.login("admin", "wrong"));
    assert!(!ctx.login("root", "admin123"));
    assert!(ctx.user().is_none());
    assert!(!ctx.is_admin());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let mut ctx = CatalogContext::new(MovieApi::default(), AdminCredentials::default());
    ctx.login("admin", "admin123");
    ctx.logout();
    assert!(ctx.user().is_none());
}

#[tokio::test]
async fn test_mutations_require_admin() {
    let (api, store) = common::spawn_in_memory().await;
    let mut ctx = CatalogContext::initialize(api, AdminCredentials::default()).await;

    assert_matches!(
        ctx.add_movie(&common::new_movie("Dune", &[])).await,
        Err(ClientError::AdminRequired)
    );
    assert_matches!(
        ctx.update_movie(1, &MovieChanges::default()).await,
        Err(ClientError::AdminRequired)
    );
    assert_matches!(ctx.delete_movie(1).await, Err(ClientError::AdminRequired));
    assert!(store.list().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_initialize_loads_existing_movies() {
    let (api, store) = common::spawn_in_memory().await;
    store.create(common::new_movie("Dune", &["Sci-Fi"])).await.unwrap();

    let ctx = CatalogContext::initialize(api, AdminCredentials::default()).await;
    assert_eq!(ctx.movies().len(), 1);
    assert_eq!(ctx.movies()[0].title, "Dune");
}

#[tokio::test]
async fn test_add_movie_appends_server_record() {
    let (mut ctx, _) = admin_context().await;

    let created = ctx
        .add_movie(&common::new_movie("Dune", &["Sci-Fi"]))
        .await
        .unwrap();

    assert_eq!(ctx.movies(), &[created.clone()]);
    assert_eq!(ctx.find_movie(created.id), Some(&created));
}

#[tokio::test]
async fn test_add_movie_failure_leaves_state_unchanged() {
    let (mut ctx, _) = admin_context().await;
    let mut movie = common::new_movie("Dune", &[]);
    movie.year = Some(1500);

    assert_matches!(ctx.add_movie(&movie).await, Err(ClientError::Core(_)));
    assert!(ctx.movies().is_empty());
}

#[tokio::test]
async fn test_update_movie_replaces_local_record() {
    let (mut ctx, _) = admin_context().await;
    let created = ctx
        .add_movie(&common::new_movie("Dune", &["Sci-Fi"]))
        .await
        .unwrap();

    let changes = MovieChanges {
        rating: Some(Some(8.0)),
        ..Default::default()
    };
    let updated = ctx.update_movie(created.id, &changes).await.unwrap().unwrap();

    assert_eq!(updated.rating, Some(8.0));
    assert_eq!(ctx.movies().len(), 1);
    assert_eq!(ctx.movies()[0].rating, Some(8.0));
}

#[tokio::test]
async fn test_update_movie_from_form_clears_blanked_fields() {
    let (mut ctx, store) = admin_context().await;
    let mut movie = common::new_movie("Dune", &["Sci-Fi"]);
    movie.year = Some(2021);
    movie.poster = Some("https://example.com/dune.jpg".into());
    let created = ctx.add_movie(&movie).await.unwrap();

    let mut form = MovieForm::from_movie(&created);
    form.year.clear();
    form.poster.clear();
    let changes = form.to_changes().unwrap();

    let updated = ctx.update_movie(created.id, &changes).await.unwrap().unwrap();
    assert_eq!(updated.year, None);
    assert_eq!(updated.poster, None);
    assert_eq!(ctx.movies()[0].year, None);

    let stored = store.find(created.id).await.unwrap().unwrap();
    assert_eq!(stored.poster, None);
    assert_eq!(stored.genre, vec!["Sci-Fi"]);
}

#[tokio::test]
async fn test_update_missing_movie_returns_none() {
    let (mut ctx, store) = admin_context().await;
    let changes = MovieChanges {
        title: Some("Ghost".into()),
        ..Default::default()
    };

    assert_matches!(ctx.update_movie(404, &changes).await, Ok(None));
    assert!(ctx.movies().is_empty());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_movie_removes_by_id() {
    let (mut ctx, _) = admin_context().await;
    let dune = ctx.add_movie(&common::new_movie("Dune", &[])).await.unwrap();
    let clue = ctx.add_movie(&common::new_movie("Clue", &[])).await.unwrap();

    ctx.delete_movie(dune.id).await.unwrap();

    assert_eq!(ctx.movies(), &[clue]);
    assert!(ctx.find_movie(dune.id).is_none());
}

#[tokio::test]
async fn test_delete_of_server_missing_movie_drops_stale_copy() {
    let (mut ctx, store) = admin_context().await;
    let dune = ctx.add_movie(&common::new_movie("Dune", &[])).await.unwrap();

    // Removed behind the context's back.
    store.delete(dune.id).await.unwrap();

    assert_matches!(
        ctx.delete_movie(dune.id).await,
        Err(ClientError::NotFound { .. })
    );
    assert!(ctx.movies().is_empty());
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_failed_refresh_keeps_stale_list() {
    let store = Arc::new(common::FlakyStore::default());
    store.create(common::new_movie("Dune", &[])).await.unwrap();
    let api = common::spawn_server(store.clone()).await;

    let mut ctx = CatalogContext::initialize(api, AdminCredentials::default()).await;
    assert_eq!(ctx.movies().len(), 1);

    store.set_failing(true);
    assert_matches!(
        ctx.refresh().await,
        Err(ClientError::Api { status: 500, .. })
    );
    assert_eq!(ctx.movies().len(), 1);
}

#[tokio::test]
async fn test_initialize_against_failing_server_starts_empty() {
    let store = Arc::new(common::FlakyStore::default());
    store.set_failing(true);
    let api = common::spawn_server(store).await;

    let ctx = CatalogContext::initialize(api, AdminCredentials::default()).await;
    assert!(ctx.movies().is_empty());
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_filters_and_derived_views() {
    let (mut ctx, _) = admin_context().await;
    let mut dune = common::new_movie("Dune", &["Sci-Fi"]);
    dune.rating = Some(8.0);
    let mut clue = common::new_movie("Clue", &["Comedy"]);
    clue.rating = Some(7.0);
    ctx.add_movie(&dune).await.unwrap();
    ctx.add_movie(&clue).await.unwrap();

    ctx.set_search_query("du");
    let titles: Vec<_> = ctx.filtered_movies().iter().map(|m| m.title.clone()).collect();
    assert_eq!(titles, vec!["Dune"]);

    ctx.set_search_query("");
    ctx.set_selected_genre(Some("Comedy".into()));
    let titles: Vec<_> = ctx.filtered_movies().iter().map(|m| m.title.clone()).collect();
    assert_eq!(titles, vec!["Clue"]);

    ctx.set_search_query("zzz");
    assert!(ctx.filtered_movies().is_empty());

    ctx.set_search_query("");
    ctx.set_selected_genre(Some(String::new()));
    assert_eq!(ctx.selected_genre(), None);
    assert_eq!(ctx.filtered_movies().len(), 2);

    assert_eq!(ctx.genres(), vec!["Comedy", "Sci-Fi"]);
    let stats = ctx.stats();
    assert_eq!(stats.total_movies, 2);
    assert_eq!(stats.average_rating, Some(7.5));
}
