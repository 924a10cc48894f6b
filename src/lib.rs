// src/lib.rs — Library root for ToolNest

pub mod app;
pub mod auth;
pub mod billing;
pub mod cli;
pub mod entitlement;
pub mod infra;
pub mod tools;
