pub mod game_service_errors;
pub mod name_service_errors;
pub mod user_service_errors;
