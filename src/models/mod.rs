mod item;
mod view;
mod blog;
mod gallery;
mod event;
mod faq;
mod lightbox;

pub use item::*;
pub use view::*;
pub use blog::*;
pub use gallery::*;
pub use event::*;
pub use faq::*;
pub use lightbox::*;
