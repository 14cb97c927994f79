// src/repositories/movie_repository.rs
//
// Movie persistence

use chrono::NaiveDate;
use rusqlite::{params, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::movie::{Movie, MovieDraft};
use crate::error::{AppError, AppResult};

/// Store interface consumed by the service layer.
///
/// Identifier assignment happens in `insert`; everything above this trait
/// works with transient copies and never holds on to stored state.
pub trait MovieRepository: Send + Sync {
    /// Persist a new record and return it with its assigned identifier.
    fn insert(&self, draft: &MovieDraft) -> AppResult<Movie>;

    /// Every record, in insertion order.
    fn find_all(&self) -> AppResult<Vec<Movie>>;

    fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// Records whose name contains `fragment` as a substring.
    ///
    /// Matching follows SQLite's `LIKE` rule: ASCII case-insensitive.
    fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Movie>>;

    /// Full-row update of an existing record, keyed by its identifier.
    fn save(&self, movie: &Movie) -> AppResult<Movie>;

    fn delete(&self, movie: &Movie) -> AppResult<()>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let duration: i64 = row.get("duration")?;

        // publish_date is column 6 of every movie SELECT in this file
        let publish_date_str: String = row.get("publish_date")?;
        let publish_date = NaiveDate::parse_from_str(&publish_date_str, "%Y-%m-%d")
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    6,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?;

        Ok(Movie {
            id: row.get("id")?,
            name: row.get("name")?,
            director: row.get("director")?,
            duration: duration as u32,
            gender: row.get("gender")?,
            category: row.get("category")?,
            publish_date,
        })
    }

    /// Escape LIKE wildcards so the fragment matches literally.
    fn escape_like(fragment: &str) -> String {
        fragment
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_")
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn insert(&self, draft: &MovieDraft) -> AppResult<Movie> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO movies (name, director, duration, gender, category, publish_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.name,
                draft.director,
                draft.duration as i64,
                draft.gender,
                draft.category,
                draft.publish_date.format("%Y-%m-%d").to_string(),
            ],
        )?;

        let id = conn.last_insert_rowid();
        Ok(draft.clone().with_id(id))
    }

    fn find_all(&self) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, director, duration, gender, category, publish_date
             FROM movies
             ORDER BY id",
        )?;

        let movies: Vec<Movie> = stmt
            .query_map([], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, director, duration, gender, category, publish_date
             FROM movies WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn find_by_name_containing(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, director, duration, gender, category, publish_date
             FROM movies
             WHERE name LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY id",
        )?;

        let pattern = Self::escape_like(fragment);
        let movies: Vec<Movie> = stmt
            .query_map(params![pattern], Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE movies
             SET name = ?1, director = ?2, duration = ?3, gender = ?4,
                 category = ?5, publish_date = ?6
             WHERE id = ?7",
            params![
                movie.name,
                movie.director,
                movie.duration as i64,
                movie.gender,
                movie.category,
                movie.publish_date.format("%Y-%m-%d").to_string(),
                movie.id,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(movie.clone())
    }

    fn delete(&self, movie: &Movie) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute("DELETE FROM movies WHERE id = ?1", params![movie.id])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_test_pool, initialize_database};

    fn test_repo() -> SqliteMovieRepository {
        let pool = Arc::new(create_test_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteMovieRepository::new(pool)
    }

    fn dune_draft() -> MovieDraft {
        MovieDraft {
            name: "Dune".to_string(),
            director: "Villeneuve".to_string(),
            duration: 155,
            gender: "Sci-Fi".to_string(),
            category: "Feature".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2021, 10, 22).unwrap(),
        }
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let repo = test_repo();

        let first = repo.insert(&dune_draft()).unwrap();
        let second = repo.insert(&dune_draft()).unwrap();

        assert!(first.id >= 1);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_insert_then_find_by_id_round_trips() {
        let repo = test_repo();

        let saved = repo.insert(&dune_draft()).unwrap();
        let found = repo.find_by_id(saved.id).unwrap().unwrap();

        assert_eq!(found, saved);
    }

    #[test]
    fn test_find_by_id_missing_returns_none() {
        let repo = test_repo();
        assert!(repo.find_by_id(999).unwrap().is_none());
    }

    #[test]
    fn test_find_all_in_insertion_order() {
        let repo = test_repo();

        let mut draft = dune_draft();
        draft.name = "Arrival".to_string();
        repo.insert(&draft).unwrap();
        repo.insert(&dune_draft()).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Arrival");
        assert_eq!(all[1].name, "Dune");
    }

    #[test]
    fn test_find_by_name_containing_substring() {
        let repo = test_repo();

        repo.insert(&dune_draft()).unwrap();
        let mut other = dune_draft();
        other.name = "Blade Runner 2049".to_string();
        repo.insert(&other).unwrap();

        let hits = repo.find_by_name_containing("une").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dune");

        // SQLite LIKE is ASCII case-insensitive
        let hits = repo.find_by_name_containing("dune").unwrap();
        assert_eq!(hits.len(), 1);

        assert!(repo.find_by_name_containing("zzz").unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_containing_escapes_wildcards() {
        let repo = test_repo();

        let mut weird = dune_draft();
        weird.name = "100% Wolf".to_string();
        repo.insert(&weird).unwrap();
        repo.insert(&dune_draft()).unwrap();

        // "%" must match literally, not as a wildcard
        let hits = repo.find_by_name_containing("100%").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "100% Wolf");
    }

    #[test]
    fn test_malformed_publish_date_surfaces_decode_error() {
        let pool = Arc::new(create_test_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();

        // Bypass the repository to plant a row the decoder must reject
        pool.get()
            .unwrap()
            .execute(
                "INSERT INTO movies (name, director, duration, gender, category, publish_date)
                 VALUES ('Dune', 'Villeneuve', 155, 'Sci-Fi', 'Feature', 'not-a-date')",
                [],
            )
            .unwrap();

        let repo = SqliteMovieRepository::new(pool);
        match repo.find_by_id(1) {
            Err(AppError::Database(rusqlite::Error::FromSqlConversionFailure(6, ty, _))) => {
                assert_eq!(ty, rusqlite::types::Type::Text);
            }
            other => panic!("expected decode failure, got {:?}", other),
        }
    }

    #[test]
    fn test_save_updates_all_fields() {
        let repo = test_repo();

        let mut movie = repo.insert(&dune_draft()).unwrap();
        movie.name = "Dune: Part Two".to_string();
        movie.duration = 166;

        let saved = repo.save(&movie).unwrap();
        assert_eq!(saved, movie);

        let found = repo.find_by_id(movie.id).unwrap().unwrap();
        assert_eq!(found.name, "Dune: Part Two");
        assert_eq!(found.duration, 166);
    }

    #[test]
    fn test_save_missing_row_is_not_found() {
        let repo = test_repo();

        let ghost = dune_draft().with_id(424242);
        match repo.save(&ghost) {
            Err(AppError::NotFound) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_delete_removes_row() {
        let repo = test_repo();

        let movie = repo.insert(&dune_draft()).unwrap();
        repo.delete(&movie).unwrap();

        assert!(repo.find_by_id(movie.id).unwrap().is_none());

        match repo.delete(&movie) {
            Err(AppError::NotFound) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
