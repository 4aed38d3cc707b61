//! Configuration and the record types shared by both handlers

pub mod config;
pub mod models;
