//! medref - client core for a medical-reference single-page app
//!
//! The crate holds everything a browser front end for the body-map site
//! needs apart from the DOM itself: page routing with load-once flags, the
//! fetch-render pipeline, admin dashboard tabs and CRUD flows, the session
//! guard, body-map interaction, toasts and HTML escaping. The DOM, the
//! network and confirmation prompts sit behind traits so the same code runs
//! headless in tests and in the bundled CLI runner.

pub mod adapters;
pub mod api;
pub mod app;
pub mod bindings;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod prelude;
pub mod render;
pub mod traits;
pub mod view_state;
