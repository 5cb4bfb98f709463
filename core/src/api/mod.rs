// glucoin/core/src/api/mod.rs

//! Typed wrappers over the backend REST API, one module per surface area,
//! mirroring how the original client grouped its fetch wrappers. Each
//! function is one endpoint; none of them retries, caches, or merges —
//! callers re-fetch when they want fresher state.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod doctor;
pub mod facility;
pub mod marketplace;
