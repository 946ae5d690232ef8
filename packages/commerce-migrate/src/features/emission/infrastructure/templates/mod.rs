//! One builder per artifact kind

pub mod bulk_load;
pub mod controller;
pub mod dto;
pub mod facade;
pub mod response;
pub mod service;
pub mod wiring;
