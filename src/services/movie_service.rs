// src/services/movie_service.rs
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::{MovieRequest, MovieResponse};
use crate::cache::Cache;
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;
use crate::services::mapper;

/// Cache key for the listing reads, derived from the operation and its
/// argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListingKey {
    All,
    NameContains(String),
}

/// Business orchestration and cache policy over the movie store.
///
/// Reads are cached read-through; writes go straight to the repository and
/// do not invalidate. That omission is inherited behavior, kept on purpose
/// until product intent is clarified (see DESIGN.md).
pub struct MovieService {
    repo: Arc<dyn MovieRepository>,
    movie_cache: Cache<i64, MovieResponse>,
    listing_cache: Cache<ListingKey, Vec<MovieResponse>>,
}

impl MovieService {
    pub fn new(repo: Arc<dyn MovieRepository>) -> Self {
        Self {
            repo,
            movie_cache: Cache::new(),
            listing_cache: Cache::new(),
        }
    }

    /// Uniform failure translation: `NotFound` passes through untouched,
    /// every other store error is wrapped with the failing operation's name.
    /// The original detail is logged here and not exposed further.
    fn translate_store_error(operation: &'static str) -> impl FnOnce(AppError) -> AppError {
        move |err| match err {
            AppError::NotFound => AppError::NotFound,
            other => {
                error!(
                    "Store error during {}, original message: {}",
                    operation, other
                );
                AppError::Persistence {
                    operation,
                    message: other.to_string(),
                }
            }
        }
    }

    pub fn create_movie(&self, request: &MovieRequest) -> AppResult<MovieResponse> {
        info!("MovieService::create_movie execution started");
        debug!(
            "MovieService::create_movie request parameters {}",
            mapper::json_as_string(request)
        );

        let draft = mapper::to_record(request);
        let movie = self
            .repo
            .insert(&draft)
            .map_err(Self::translate_store_error("create_movie"))?;
        let response = mapper::to_response(&movie);

        debug!(
            "MovieService::create_movie persisted record {}",
            mapper::json_as_string(&response)
        );
        info!("MovieService::create_movie execution ended");
        Ok(response)
    }

    pub fn get_movies(&self) -> AppResult<Vec<MovieResponse>> {
        info!("MovieService::get_movies execution started");

        let responses = self.listing_cache.get_or_compute(ListingKey::All, || {
            self.repo
                .find_all()
                .map(|movies| movies.iter().map(mapper::to_response).collect())
                .map_err(Self::translate_store_error("get_movies"))
        })?;

        debug!(
            "MovieService::get_movies retrieved {} movies",
            responses.len()
        );
        info!("MovieService::get_movies execution ended");
        Ok(responses)
    }

    pub fn get_movies_by_name_containing(&self, name: &str) -> AppResult<Vec<MovieResponse>> {
        info!("MovieService::get_movies_by_name_containing execution started");

        let key = ListingKey::NameContains(name.to_string());
        let responses = self.listing_cache.get_or_compute(key, || {
            self.repo
                .find_by_name_containing(name)
                .map(|movies| movies.iter().map(mapper::to_response).collect())
                .map_err(Self::translate_store_error("get_movies_by_name_containing"))
        })?;

        debug!(
            "MovieService::get_movies_by_name_containing matched {} movies for {:?}",
            responses.len(),
            name
        );
        info!("MovieService::get_movies_by_name_containing execution ended");
        Ok(responses)
    }

    pub fn get_movie_by_id(&self, movie_id: i64) -> AppResult<MovieResponse> {
        info!("MovieService::get_movie_by_id execution started");

        let response = self.movie_cache.get_or_compute(movie_id, || {
            self.repo
                .find_by_id(movie_id)
                .map_err(Self::translate_store_error("get_movie_by_id"))?
                .map(|movie| mapper::to_response(&movie))
                .ok_or(AppError::NotFound)
        })?;

        debug!(
            "MovieService::get_movie_by_id retrieved movie {} {}",
            movie_id,
            mapper::json_as_string(&response)
        );
        info!("MovieService::get_movie_by_id execution ended");
        Ok(response)
    }

    /// Replace name, director, duration and gender with the request's
    /// values. The request also carries category and publish date, but those
    /// keep their stored values; callers relying on that asymmetry are
    /// covered by tests.
    pub fn update_movie(&self, movie_id: i64, request: &MovieRequest) -> AppResult<MovieResponse> {
        info!("MovieService::update_movie execution started");

        let mut movie = self
            .repo
            .find_by_id(movie_id)
            .map_err(Self::translate_store_error("update_movie"))?
            .ok_or(AppError::NotFound)?;

        movie.name = request.name.clone();
        movie.director = request.director.clone();
        movie.duration = request.duration;
        movie.gender = request.gender.clone();

        let saved = self
            .repo
            .save(&movie)
            .map_err(Self::translate_store_error("update_movie"))?;
        let response = mapper::to_response(&saved);

        debug!(
            "MovieService::update_movie updated movie {} {}",
            movie_id,
            mapper::json_as_string(&response)
        );
        info!("MovieService::update_movie execution ended");
        Ok(response)
    }

    pub fn delete_movie(&self, movie_id: i64) -> AppResult<()> {
        info!("MovieService::delete_movie execution started");

        let movie = self
            .repo
            .find_by_id(movie_id)
            .map_err(Self::translate_store_error("delete_movie"))?
            .ok_or(AppError::NotFound)?;

        self.repo
            .delete(&movie)
            .map_err(Self::translate_store_error("delete_movie"))?;

        debug!("MovieService::delete_movie deleted movie {}", movie_id);
        info!("MovieService::delete_movie execution ended");
        Ok(())
    }
}
