pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::memory::InMemoryProductRepository;
pub use app::repository::{PgProductRepository, ProductRepository};
pub use domain::{Product, ProductDraft};
pub use error::StoreError;
