pub mod analysis;
pub mod app_module;
pub mod app_router;
pub mod health;
pub mod pages;
pub mod prompts;
