//! Infrastructure Database Layer
//!
//! PostgreSQL storage for cars, owners, insurance policies and claims using
//! SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Repositories own the SQL and
//! return row types; adapters implement the domain ports on top of them and
//! translate rows into domain models.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig};
//! use infra_db::adapters::PostgresPolicyAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/carins")).await?;
//! run_migrations(&pool).await?;
//! let policies = PostgresPolicyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::DatabaseError;
pub use migrations::{run_migrations, MIGRATOR};
