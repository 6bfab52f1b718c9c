//! Transport adapters implementing the `api` traits.

pub mod http_api;

pub use http_api::HttpGameApi;
