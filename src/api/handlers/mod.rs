//! HTTP request handlers for API endpoints.

pub mod update_record;

pub use update_record::update_record_handler;
