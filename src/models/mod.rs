pub mod bet;
pub mod config;
pub mod draw;
pub mod notification;
