use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use marquee_core::{Director, Genre, Movie, MovieId, MovieStore, MovieStoreError, NewMovie};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

pub struct PostgresMovieStore {
    pool: sqlx::PgPool,
    op_timeout: Duration,
}

impl PostgresMovieStore {
    pub fn new(pool: Pool<Postgres>, op_timeout: Duration) -> Self {
        PostgresMovieStore { pool, op_timeout }
    }

    async fn bounded<T>(
        &self,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, MovieStoreError> {
        tokio::time::timeout(self.op_timeout, query)
            .await
            .map_err(|_| MovieStoreError::Unexpected("database operation timed out".to_string()))?
            .map_err(|e| MovieStoreError::Unexpected(e.to_string()))
    }
}

#[derive(FromRow)]
struct MovieRow {
    id: Uuid,
    title: String,
    description: String,
    genre_name: String,
    genre_description: String,
    director_name: String,
    director_bio: String,
    director_birth: Option<NaiveDate>,
    director_death: Option<NaiveDate>,
    image_path: Option<String>,
    featured: Option<bool>,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Movie {
            id: MovieId::new(row.id.to_string()),
            title: row.title,
            description: row.description,
            genre: Genre {
                name: row.genre_name,
                description: row.genre_description,
            },
            director: Director {
                name: row.director_name,
                bio: row.director_bio,
                birth: row.director_birth,
                death: row.director_death,
            },
            image_path: row.image_path,
            featured: row.featured,
        }
    }
}

#[async_trait::async_trait]
impl MovieStore for PostgresMovieStore {
    #[tracing::instrument(name = "Listing movies from PostgreSQL", skip_all)]
    async fn list_movies(&self) -> Result<Vec<Movie>, MovieStoreError> {
        let query = sqlx::query_as::<_, MovieRow>("SELECT * FROM movies ORDER BY title");

        let rows = self.bounded(query.fetch_all(&self.pool)).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    #[tracing::instrument(name = "Retrieving movie by title from PostgreSQL", skip_all)]
    async fn find_by_title(&self, title: &str) -> Result<Movie, MovieStoreError> {
        let query =
            sqlx::query_as::<_, MovieRow>("SELECT * FROM movies WHERE title = $1").bind(title);

        let row = self
            .bounded(query.fetch_optional(&self.pool))
            .await?
            .ok_or(MovieStoreError::MovieNotFound)?;
        Ok(row.into())
    }

    #[tracing::instrument(name = "Retrieving movies by genre from PostgreSQL", skip_all)]
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Movie>, MovieStoreError> {
        let query = sqlx::query_as::<_, MovieRow>(
            "SELECT * FROM movies WHERE genre_name = $1 ORDER BY title",
        )
        .bind(genre);

        let rows = self.bounded(query.fetch_all(&self.pool)).await?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    #[tracing::instrument(name = "Retrieving director from PostgreSQL", skip_all)]
    async fn find_director(&self, name: &str) -> Result<Director, MovieStoreError> {
        let query = sqlx::query_as::<_, MovieRow>(
            "SELECT * FROM movies WHERE director_name = $1 LIMIT 1",
        )
        .bind(name);

        let row = self
            .bounded(query.fetch_optional(&self.pool))
            .await?
            .ok_or(MovieStoreError::MovieNotFound)?;
        Ok(Movie::from(row).director)
    }

    #[tracing::instrument(name = "Adding movie to PostgreSQL", skip_all)]
    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, MovieStoreError> {
        let query = sqlx::query_as::<_, MovieRow>(
            r#"
                INSERT INTO movies (
                    title, description,
                    genre_name, genre_description,
                    director_name, director_bio, director_birth, director_death,
                    image_path, featured
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
            "#,
        )
        .bind(movie.title)
        .bind(movie.description)
        .bind(movie.genre.name)
        .bind(movie.genre.description)
        .bind(movie.director.name)
        .bind(movie.director.bio)
        .bind(movie.director.birth)
        .bind(movie.director.death)
        .bind(movie.image_path)
        .bind(movie.featured);

        let row = self.bounded(query.fetch_one(&self.pool)).await?;
        Ok(row.into())
    }

    #[tracing::instrument(name = "Deleting movie from PostgreSQL", skip_all)]
    async fn delete_movie(&self, id: &MovieId) -> Result<(), MovieStoreError> {
        // Ids that do not even parse as UUIDs cannot exist in the catalog.
        let uuid = Uuid::parse_str(id.as_str()).map_err(|_| MovieStoreError::MovieNotFound)?;

        let query = sqlx::query("DELETE FROM movies WHERE id = $1").bind(uuid);

        let result = self.bounded(query.execute(&self.pool)).await?;

        if result.rows_affected() == 0 {
            return Err(MovieStoreError::MovieNotFound);
        }

        Ok(())
    }
}
