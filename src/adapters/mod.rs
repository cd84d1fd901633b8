pub mod controllers;
pub mod dto;
pub mod error;
pub mod grpc_service;
pub mod interceptors;
pub mod reflection;
