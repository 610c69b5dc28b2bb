//! Data models shared by the Prenoms API server and its clients.
//!
//! Every record here mirrors a JSON payload exchanged over HTTP. Entities are
//! created server side; clients only ever hold read-only snapshots of them.

pub mod models;
