pub mod auth_service;
pub mod bootstrap;
pub mod catalog;
pub mod stores;
