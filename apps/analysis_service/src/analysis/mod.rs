pub mod analysis_controller;
pub mod analysis_service;
pub mod fallback;
pub mod report;
pub mod sanitize;
