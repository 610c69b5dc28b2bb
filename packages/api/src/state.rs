use std::sync::Arc;

use crate::repositories::game_repository::InMemoryGameRepository;
use crate::repositories::name_repository::InMemoryNameRepository;
use crate::repositories::user_repository::InMemoryUserRepository;
use crate::services::game_service::GameService;
use crate::services::name_service::NameService;
use crate::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub name_service: Arc<NameService>,
    pub game_service: Arc<GameService>,
    /// Request header carrying the username set by the authenticating proxy.
    pub auth_header: Arc<str>,
}

impl AppState {
    /// Wires every service onto process-local storage.
    pub fn in_memory(auth_header: &str) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let names = Arc::new(InMemoryNameRepository::new());
        let games = Arc::new(InMemoryGameRepository::new());

        AppState {
            user_service: Arc::new(UserService::new(users.clone())),
            name_service: Arc::new(NameService::new(names.clone())),
            game_service: Arc::new(GameService::new(games, names, users)),
            auth_header: Arc::from(auth_header),
        }
    }
}
