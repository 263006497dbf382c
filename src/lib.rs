// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod errors;
pub mod models;

pub mod csv;
pub mod store;

pub mod ingest;
pub mod regulations;
pub mod report;
pub mod tasks;
pub mod updates;

pub mod cli;
pub mod gui;
