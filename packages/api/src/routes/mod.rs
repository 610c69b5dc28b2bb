pub mod games;
pub mod health;
pub mod me;
pub mod names;
pub mod users;
