pub mod bets;
pub mod config;
pub mod draws;
pub mod notifications;
