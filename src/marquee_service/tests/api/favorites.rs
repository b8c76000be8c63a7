use crate::helpers::spawn_app;

#[tokio::test]
async fn added_favorites_show_up_in_the_returned_view() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app.post_authed("/users/alice01/movies/m42", &token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["FavoriteMovies"], serde_json::json!(["m42"]));
}

#[tokio::test]
async fn repeat_adds_are_kept_as_duplicates() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    app.post_authed("/users/alice01/movies/m42", &token).await;
    let response = app.post_authed("/users/alice01/movies/m42", &token).await;

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["FavoriteMovies"], serde_json::json!(["m42", "m42"]));
}

#[tokio::test]
async fn adding_to_a_missing_user_is_404() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let response = app.post_authed("/users/nobody1/movies/m42", &token).await;
    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn remove_clears_every_occurrence_of_the_id() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    for id in ["m1", "m2", "m1"] {
        app.post_authed(&format!("/users/alice01/movies/{id}"), &token)
            .await;
    }

    let response = app
        .delete_authed("/users/alice01/favoriteMovies/m1", &token)
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        "Movie was removed from favorites"
    );

    let view: serde_json::Value = app
        .get_authed("/users/alice01", &token)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(view["FavoriteMovies"], serde_json::json!(["m2"]));
}

#[tokio::test]
async fn removing_an_id_that_is_not_a_favorite_is_404_and_changes_nothing() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;
    app.post_authed("/users/alice01/movies/m1", &token).await;

    let response = app
        .delete_authed("/users/alice01/favoriteMovies/m404", &token)
        .await;
    assert_eq!(response.status().as_u16(), 404);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Movie not found in favorites");

    let view: serde_json::Value = app
        .get_authed("/users/alice01", &token)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(view["FavoriteMovies"], serde_json::json!(["m1"]));
}

#[tokio::test]
async fn concurrent_adds_on_one_account_lose_nothing() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let (a, b) = tokio::join!(
        app.post_authed("/users/alice01/movies/m1", &token),
        app.post_authed("/users/alice01/movies/m2", &token),
    );
    assert_eq!(a.status().as_u16(), 200);
    assert_eq!(b.status().as_u16(), 200);

    let view: serde_json::Value = app
        .get_authed("/users/alice01", &token)
        .await
        .json()
        .await
        .unwrap();
    let favorites = view["FavoriteMovies"].as_array().unwrap();
    assert_eq!(favorites.len(), 2);
}

#[tokio::test]
async fn favorites_mutations_require_a_token() {
    let app = spawn_app().await;
    app.register(&crate::helpers::sample_user("alice01")).await;

    let response = app
        .client
        .post(format!("{}/users/alice01/movies/m42", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
