//! Dinosaur encyclopedia: a small localized site.
//!
//! The interesting part is [`routes`]: one validated table of localized page
//! patterns, a resolver building and matching paths, and a redirector that
//! keeps URLs in the reader's language.

pub mod config;
pub mod data;
pub mod i18n;
pub mod pages;
pub mod routes;
pub mod server;
