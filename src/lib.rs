pub mod api;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod service;
pub mod storage;
