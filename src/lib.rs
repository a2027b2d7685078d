//! coursecart - CRUD over named document collections, served over HTTP

pub mod cli;
pub mod http_server;
pub mod rest_api;
pub mod store;
