use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use marquee_core::{Director, Movie, MovieId, MovieStore, MovieStoreError, NewMovie};

/// In-memory catalog for tests and local development.
#[derive(Default, Clone)]
pub struct HashMapMovieStore {
    movies: Arc<RwLock<HashMap<MovieId, Movie>>>,
}

impl HashMapMovieStore {
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl MovieStore for HashMapMovieStore {
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieStoreError> {
        let movies = self.movies.read().await;
        let mut all: Vec<Movie> = movies.values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }

    async fn find_by_title(&self, title: &str) -> Result<Movie, MovieStoreError> {
        let movies = self.movies.read().await;
        movies
            .values()
            .find(|movie| movie.title == title)
            .cloned()
            .ok_or(MovieStoreError::MovieNotFound)
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Movie>, MovieStoreError> {
        let movies = self.movies.read().await;
        let mut matches: Vec<Movie> = movies
            .values()
            .filter(|movie| movie.genre.name == genre)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(matches)
    }

    async fn find_director(&self, name: &str) -> Result<Director, MovieStoreError> {
        let movies = self.movies.read().await;
        movies
            .values()
            .find(|movie| movie.director.name == name)
            .map(|movie| movie.director.clone())
            .ok_or(MovieStoreError::MovieNotFound)
    }

    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, MovieStoreError> {
        let id = MovieId::new(Uuid::new_v4().to_string());
        let stored = Movie {
            id: id.clone(),
            title: movie.title,
            description: movie.description,
            genre: movie.genre,
            director: movie.director,
            image_path: movie.image_path,
            featured: movie.featured,
        };
        self.movies.write().await.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_movie(&self, id: &MovieId) -> Result<(), MovieStoreError> {
        self.movies
            .write()
            .await
            .remove(id)
            .ok_or(MovieStoreError::MovieNotFound)?;
        Ok(())
    }
}
