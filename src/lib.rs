//! # jobportal
//!
//! Leptos + WASM client for a job-board application. Authenticated users
//! see a dashboard and manage job postings (create, edit, delete) through
//! a REST backend.
//!
//! The crate splits into a thin network layer (`net`), durable token/user
//! persistence (`storage`), shared reactive state (`state`), and the
//! presentational `components` and `pages` on top.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;
