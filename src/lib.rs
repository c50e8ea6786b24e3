// Library for tests to access modules

pub mod config;
pub mod docker_repo;
pub mod models;
pub mod routes;
pub mod server_service;
pub mod version;
