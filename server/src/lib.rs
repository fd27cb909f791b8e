pub mod auth;
pub mod config;
pub mod donation;
pub mod interceptors;
pub mod protobuf;
pub mod protos;
pub mod services;
