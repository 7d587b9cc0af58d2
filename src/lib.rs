//! Multilingual clinic website with language-prefixed routing.
//!
//! Public URLs carry their language as the first path segment
//! (`/en/hizmetler`); the back office under `/admin` never does. The
//! [`routing`] module holds the framework-agnostic logic, [`server`] applies
//! it to HTTP requests.

pub mod config;
pub mod detect;
pub mod i18n;
pub mod pages;
pub mod preferences;
pub mod routing;
pub mod server;
