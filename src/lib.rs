pub mod app_config;
pub mod auth;
pub mod contract;
pub mod db;
pub mod orm;
pub mod seed;
