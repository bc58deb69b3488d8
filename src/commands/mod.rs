mod site;
mod config;
mod blog;
mod gallery;
mod event;
mod lightbox;
mod faq;

pub use site::*;
pub use config::*;
pub use blog::*;
pub use gallery::*;
pub use event::*;
pub use lightbox::*;
pub use faq::*;
