//! Library crate for lfg-back, exposing modules for the binaries and integration tests.

pub mod codec;
pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
