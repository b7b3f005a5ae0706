#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;
