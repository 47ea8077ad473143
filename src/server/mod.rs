//! Server-side API backend and business logic.
//!
//! This module contains both server roles: the six REST services and the gateway
//! in front of them. It uses Axum as the web framework and SeaORM for database
//! operations.
//!
//! # Architecture
//!
//! Each service follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, ownership and uniqueness rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Gateway trust check, caller identity, CORS
//!
//! The gateway (`gateway/`) matches request paths against an ordered route table,
//! verifies the caller's bearer token, rewrites the request and forwards it.
//!
//! # Request Flow
//!
//! 1. **Gateway** matches the route, checks the token and forwards with trust headers
//! 2. **Middleware** rejects requests without the gateway secret
//! 3. **Controller** extracts the caller, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
