use marquee_core::{Director, Movie, MovieId, MovieStore, MovieStoreError, NewMovie};

/// Catalog use case - plain record retrieval and maintenance delegated to
/// the movie store. No transformation happens here beyond the query
/// itself, which is why the catalog gets one thin use case instead of one
/// per operation.
pub struct CatalogUseCase<'a, M>
where
    M: MovieStore + ?Sized,
{
    movies: &'a M,
}

impl<'a, M> CatalogUseCase<'a, M>
where
    M: MovieStore + ?Sized,
{
    pub fn new(movies: &'a M) -> Self {
        Self { movies }
    }

    #[tracing::instrument(name = "CatalogUseCase::list", skip(self))]
    pub async fn list(&self) -> Result<Vec<Movie>, MovieStoreError> {
        self.movies.list_movies().await
    }

    #[tracing::instrument(name = "CatalogUseCase::by_title", skip(self))]
    pub async fn by_title(&self, title: &str) -> Result<Movie, MovieStoreError> {
        self.movies.find_by_title(title).await
    }

    /// Returns `MovieNotFound` when no movie carries the genre, matching
    /// the catalog's 404-on-empty contract.
    #[tracing::instrument(name = "CatalogUseCase::by_genre", skip(self))]
    pub async fn by_genre(&self, genre: &str) -> Result<Vec<Movie>, MovieStoreError> {
        let movies = self.movies.find_by_genre(genre).await?;
        if movies.is_empty() {
            return Err(MovieStoreError::MovieNotFound);
        }
        Ok(movies)
    }

    #[tracing::instrument(name = "CatalogUseCase::director", skip(self))]
    pub async fn director(&self, name: &str) -> Result<Director, MovieStoreError> {
        self.movies.find_director(name).await
    }

    #[tracing::instrument(name = "CatalogUseCase::add", skip_all)]
    pub async fn add(&self, movie: NewMovie) -> Result<Movie, MovieStoreError> {
        self.movies.insert_movie(movie).await
    }

    #[tracing::instrument(name = "CatalogUseCase::remove", skip(self))]
    pub async fn remove(&self, id: &MovieId) -> Result<(), MovieStoreError> {
        self.movies.delete_movie(id).await
    }
}
