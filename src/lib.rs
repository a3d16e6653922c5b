//! Yoga studio booking client
//!
//! This library provides the client side of the session booking application:
//! session state, navigation guards, access rules, form validation, the REST
//! services and the view models built on top of them.

pub mod access;
pub mod api;
pub mod components;
pub mod config;
pub mod forms;
pub mod models;
pub mod routing;
pub mod state;
