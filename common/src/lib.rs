pub mod config;
pub mod cpe;
pub mod db;
pub mod error;
pub mod time;
