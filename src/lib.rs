pub mod api_docs;
pub mod app;
pub mod backend;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;
