pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod model;
pub mod notifier;
pub mod repository;
pub mod service;
pub mod state;
pub mod storage;
pub mod utils;
