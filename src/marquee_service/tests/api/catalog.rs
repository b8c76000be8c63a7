use crate::helpers::spawn_app;

fn sample_movie(title: &str, genre: &str, director: &str) -> serde_json::Value {
    serde_json::json!({
        "Title": title,
        "Description": "A movie",
        "Genre": { "Name": genre, "Description": "A genre" },
        "Director": { "Name": director, "Bio": "A director" },
    })
}

#[tokio::test]
async fn browsing_the_catalog_needs_no_token() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/movies", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!([])
    );
}

#[tokio::test]
async fn the_welcome_route_is_public() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Welcome to my movie app!");
}

#[tokio::test]
async fn catalog_mutations_require_a_token() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(format!("{}/movies", app.address))
        .json(&sample_movie("Arrival", "SciFi", "Denis Villeneuve"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn added_movies_are_browsable_by_title_genre_and_director() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let created = app
        .client
        .post(format!("{}/movies", app.address))
        .bearer_auth(&token)
        .json(&sample_movie("Arrival", "SciFi", "Denis Villeneuve"))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);

    let by_title: serde_json::Value = app
        .client
        .get(format!("{}/movies/Arrival", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_title["Title"], "Arrival");

    let by_genre: serde_json::Value = app
        .client
        .get(format!("{}/movies/Genre/SciFi", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_genre.as_array().unwrap().len(), 1);

    let director: serde_json::Value = app
        .client
        .get(format!("{}/movies/Director/Denis Villeneuve", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(director["Name"], "Denis Villeneuve");
    assert_eq!(director["Bio"], "A director");
}

#[tokio::test]
async fn an_empty_genre_is_404_not_an_empty_list() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/movies/Genre/Nonexistent", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "No movies found for this genre");
}

#[tokio::test]
async fn deleted_movies_disappear_from_the_catalog() {
    let app = spawn_app().await;
    let token = app.register_and_login("alice01").await;

    let created: serde_json::Value = app
        .client
        .post(format!("{}/movies", app.address))
        .bearer_auth(&token)
        .json(&sample_movie("Arrival", "SciFi", "Denis Villeneuve"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["Id"].as_str().unwrap();

    let response = app.delete_authed(&format!("/movies/{id}"), &token).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Movie was deleted");

    let lookup = app
        .client
        .get(format!("{}/movies/Arrival", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(lookup.status().as_u16(), 404);
}
