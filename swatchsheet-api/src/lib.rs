//! # swatchsheet-api
//!
//! REST API server for the swatchsheet library
//!

mod api;
mod config;

pub use api::{
    app, generate_pdf, get_reference, health_check, search_references, AppError, AppState,
    DeviationInput, ErrorResponse, GeneratePdfRequest, SearchParams, DEFAULT_SEARCH_LIMIT,
};
pub use config::ServerConfig;
