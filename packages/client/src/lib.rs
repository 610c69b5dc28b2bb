//! Client for the Prenoms name voting API.
//!
//! Pages hold their state in [`store::Store`] cells that a view can watch.
//! They load data through the [`api::NamesApi`] trait, and a failed request
//! is only logged.

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod store;
pub mod terminal;

#[cfg(test)]
mod test_support;
