// 🔗 Entity Matcher - join awards with movies on (title, year)
//
// A movie matches an award when:
//   lower(award.film) == lower(movie.name)
//   AND award.year_film ∈ { movie.year, movie.released.year() }
//
// First match in movie order wins; there is no scoring.

use crate::entities::{AwardedMovie, Movie, OscarInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

// ============================================================================
// MATCH REPORT
// ============================================================================

/// An award for which no movie was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedAward {
    pub film: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// In award order
    pub matched: Vec<AwardedMovie>,
    pub unmatched: Vec<UnmatchedAward>,
}

impl MatchReport {
    pub fn summary(&self) -> String {
        format!(
            "Matched {} movies with awards ({} unmatched)",
            self.matched.len(),
            self.unmatched.len()
        )
    }
}

// ============================================================================
// MOVIE INDEX
// ============================================================================

/// Movies bucketed by lower-cased title; buckets keep catalog order
pub struct MovieIndex<'a> {
    movies: &'a [Movie],
    by_title: HashMap<String, Vec<usize>>,
}

impl<'a> MovieIndex<'a> {
    pub fn new(movies: &'a [Movie]) -> Self {
        let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, movie) in movies.iter().enumerate() {
            by_title.entry(movie.name.to_lowercase()).or_default().push(i);
        }

        debug!(
            movies = movies.len(),
            titles = by_title.len(),
            "Built movie title index"
        );

        MovieIndex { movies, by_title }
    }

    /// First movie with this title (any case) released in `year`
    pub fn find(&self, title: &str, year: i32) -> Option<&'a Movie> {
        let movies = self.movies;
        self.by_title
            .get(&title.to_lowercase())?
            .iter()
            .map(|&i| &movies[i])
            .find(|movie| movie.released_in(year))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Linear scan equivalent of `MovieIndex::find`
pub fn find_match<'m>(award: &OscarInfo, movies: &'m [Movie]) -> Option<&'m Movie> {
    let title = award.film.to_lowercase();
    movies
        .iter()
        .find(|movie| movie.name.to_lowercase() == title && movie.released_in(award.year_film))
}

// ============================================================================
// MATCHING
// ============================================================================

/// Match every award against the catalog
pub fn match_awarded_movies(awards: &[OscarInfo], movies: &[Movie]) -> MatchReport {
    let index = MovieIndex::new(movies);
    if index.is_empty() && !awards.is_empty() {
        warn!(awards = awards.len(), "Movie catalog is empty; no award can be matched");
    }

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for award in awards {
        match index.find(&award.film, award.year_film) {
            Some(movie) => {
                debug!(award = %award, movie = %movie, "Matched award with movie");
                matched.push(AwardedMovie::new(
                    award.year_film,
                    award.film.clone(),
                    movie.score,
                    movie.gross_revenue,
                ));
            }
            None => {
                warn!(
                    film = %award.film,
                    year = award.year_film,
                    "Could not find match for film"
                );
                unmatched.push(UnmatchedAward {
                    film: award.film.clone(),
                    year: award.year_film,
                });
            }
        }
    }

    MatchReport { matched, unmatched }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ReleaseDate;
    use chrono::NaiveDate;

    fn award(film: &str, year_film: i32) -> OscarInfo {
        OscarInfo {
            year_film,
            year_ceremony: year_film + 1,
            ceremony: 1,
            category: "Best Picture".to_string(),
            name: "Producers".to_string(),
            film: film.to_string(),
            winner: true,
        }
    }

    fn movie(name: &str, year: i32, released: ReleaseDate, score: f64, gross: f64) -> Movie {
        Movie {
            budget: 1_000_000.0,
            company: "Studio".to_string(),
            country: "USA".to_string(),
            director: "Director".to_string(),
            genre: "Drama".to_string(),
            gross_revenue: gross,
            name: name.to_string(),
            rating: "R".to_string(),
            released,
            runtime: 120,
            score,
            star: "Star".to_string(),
            votes: 1000,
            writer: "Writer".to_string(),
            year,
        }
    }

    fn full(y: i32, m: u32, d: u32) -> ReleaseDate {
        ReleaseDate::Full(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_case_insensitive_title_and_explicit_year() {
        let awards = vec![award("The Matrix", 1999)];
        let movies = vec![movie("the matrix", 1999, full(2000, 3, 31), 8.7, 171_479_930.0)];

        let report = match_awarded_movies(&awards, &movies);

        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].movie, "The Matrix");
        assert_eq!(report.matched[0].year, 1999);
        assert_eq!(report.matched[0].score, 8.7);
        assert_eq!(report.matched[0].gross_revenue, 171_479_930.0);
        assert!(report.unmatched.is_empty());
    }

    #[test]
    fn test_release_date_year_also_matches() {
        let awards = vec![award("Crash", 2005)];
        let movies = vec![movie("Crash", 2004, ReleaseDate::Year(2005), 7.7, 54_580_300.0)];

        let report = match_awarded_movies(&awards, &movies);
        assert_eq!(report.matched.len(), 1);
    }

    #[test]
    fn test_first_match_wins() {
        let awards = vec![award("Hamlet", 1990)];
        let movies = vec![
            movie("Hamlet", 1948, full(1948, 5, 6), 7.7, 1.0),
            movie("HAMLET", 1990, full(1990, 12, 19), 6.8, 20_710_451.0),
            movie("hamlet", 1990, full(1991, 1, 18), 5.0, 2.0),
        ];

        let report = match_awarded_movies(&awards, &movies);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.matched[0].score, 6.8);
        assert_eq!(report.matched[0].gross_revenue, 20_710_451.0);
    }

    #[test]
    fn test_unmatched_awards_are_reported_not_emitted() {
        let awards = vec![
            award("Platoon", 1986),
            award("Nowhere Film", 1987),
            award("Rain Man", 1988),
            award("Platoon", 1999),
        ];
        let movies = vec![
            movie("Platoon", 1986, full(1986, 12, 19), 8.1, 138_530_565.0),
            movie("Rain Man", 1988, full(1988, 12, 16), 8.0, 172_825_435.0),
        ];

        let report = match_awarded_movies(&awards, &movies);

        assert_eq!(report.matched.len(), awards.len() - report.unmatched.len());
        let titles: Vec<&str> = report.matched.iter().map(|m| m.movie.as_str()).collect();
        assert_eq!(titles, vec!["Platoon", "Rain Man"]);
        assert_eq!(
            report.unmatched,
            vec![
                UnmatchedAward {
                    film: "Nowhere Film".to_string(),
                    year: 1987
                },
                UnmatchedAward {
                    film: "Platoon".to_string(),
                    year: 1999
                },
            ]
        );
        assert_eq!(report.summary(), "Matched 2 movies with awards (2 unmatched)");
    }

    #[test]
    fn test_title_must_match_exactly_apart_from_case() {
        let awards = vec![award("The Last Emperor", 1987)];
        let movies = vec![movie("Last Emperor", 1987, full(1987, 11, 20), 7.7, 43_984_230.0)];

        let report = match_awarded_movies(&awards, &movies);
        assert!(report.matched.is_empty());
        assert_eq!(report.unmatched.len(), 1);
    }

    #[test]
    fn test_index_agrees_with_linear_scan() {
        let movies = vec![
            movie("Titanic", 1953, full(1953, 4, 16), 7.0, 1.0),
            movie("titanic", 1997, full(1997, 12, 19), 7.8, 600_788_188.0),
            movie("Braveheart", 1995, full(1995, 5, 24), 8.3, 75_609_945.0),
        ];
        let index = MovieIndex::new(&movies);

        for a in [
            award("Titanic", 1997),
            award("TITANIC", 1953),
            award("Braveheart", 1995),
            award("Braveheart", 1996),
            award("Gladiator", 2000),
        ] {
            let indexed = index.find(&a.film, a.year_film).map(|m| m as *const Movie);
            let scanned = find_match(&a, &movies).map(|m| m as *const Movie);
            assert_eq!(indexed, scanned, "{} ({})", a.film, a.year_film);
        }
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        let awards = vec![award("Gladiator", 2000)];
        let report = match_awarded_movies(&awards, &[]);
        assert!(MovieIndex::new(&[]).is_empty());
        assert!(report.matched.is_empty());
        assert_eq!(report.unmatched.len(), 1);
    }
}
