mod attachment;
pub mod compress;
mod form;
pub mod handlers;
pub mod routes;
pub mod sitemap;
pub mod video;

pub use form::FormFields;
pub use routes::{create_router, PAGE_ROUTES};
