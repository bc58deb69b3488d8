pub mod api_client;
pub mod blog_service;
pub mod config_service;
pub mod detail_loader;
pub mod faq_service;
pub mod format;
pub mod gallery_service;
pub mod generation;
pub mod image_resolver;
pub mod lightbox;
pub mod list_loader;
pub mod parallax;
