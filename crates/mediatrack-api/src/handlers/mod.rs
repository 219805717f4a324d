//! HTTP request handlers

pub mod activities;
pub mod dashboard;
pub mod health;
