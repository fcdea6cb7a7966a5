pub mod capture_service;
pub mod simple_capture_service;
