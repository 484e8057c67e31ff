pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod pin;
pub mod routes;
pub mod services;
