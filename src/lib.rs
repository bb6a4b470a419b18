pub mod api_docs;
pub mod app;
pub mod bootstrap;
pub mod config;
pub mod entities;
pub mod errors;
pub mod extractor;
pub mod routes;
pub mod state;
pub mod student;
pub mod utils;
