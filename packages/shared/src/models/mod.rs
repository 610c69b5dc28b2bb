pub mod game;
pub mod health;
pub mod name;
pub mod stage;
pub mod user;
