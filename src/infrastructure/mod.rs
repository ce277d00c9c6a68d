// Infrastructure layer - Storage, configuration and wire adapters
pub mod chunked_json;
pub mod config;
pub mod http_response;
pub mod memory_repository;
pub mod seed;
