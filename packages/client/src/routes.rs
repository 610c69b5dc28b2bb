use std::fmt;
use std::str::FromStr;

/// The three pages reachable by URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/games`
    GameList,
    /// `/games/:id`
    Vote { game_id: String },
    /// `/games/:id/results`
    Results { game_id: String },
}

#[derive(Debug, PartialEq)]
pub enum RouteError {
    Unknown(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RouteError::Unknown(path) => write!(f, "Unknown route: {}", path),
        }
    }
}

impl std::error::Error for RouteError {}

impl FromStr for Route {
    type Err = RouteError;

    /// Accepts both `/games/...` and hash form `#/games/...`.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let trimmed = trimmed.trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            ["games"] => Ok(Route::GameList),
            ["games", id] if !id.is_empty() => Ok(Route::Vote {
                game_id: id.to_string(),
            }),
            ["games", id, "results"] if !id.is_empty() => Ok(Route::Results {
                game_id: id.to_string(),
            }),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::GameList => write!(f, "/games"),
            Route::Vote { game_id } => write!(f, "/games/{}", game_id),
            Route::Results { game_id } => write!(f, "/games/{}/results", game_id),
        }
    }
}
