//! API Module
//!
//! Client side of the PokeAPI catalog.
//!
//! # Endpoints used
//! - `GET /location-area?offset=&limit=` - Paged location areas
//! - `GET /location-area/{name}` - Pokemon encountered in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::{Fetched, PokeApiClient, Source, PAGE_SIZE};
