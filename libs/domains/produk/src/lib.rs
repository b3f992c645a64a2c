//! Produk Domain
//!
//! Products with a brand (`merk`) and a category (`kategori`), stored in MySQL.
//!
//! ```text
//! handlers    HTTP endpoints, OpenAPI doc
//!    │
//! service     id parsing, presence validation, not-found mapping
//!    │
//! repository  trait + MySQL and in-memory implementations
//!    │
//! models      row projections and request/response bodies
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_produk::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::new().with_merk(1, "Asus");
//! let service = ProductService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod mysql;
pub mod repository;
pub mod service;

pub use error::{Operation, ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateProduct, CreatedProduct, ProductDetail, ProductMessage, ProductSummary, UpdateProduct,
};
pub use mysql::MySqlProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
