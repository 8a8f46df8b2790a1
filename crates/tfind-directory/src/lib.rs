pub mod client;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod types;

pub use client::TheatreDirectoryClient;
pub use error::DirectoryError;
pub use filter::within_radius;
pub use normalize::parse_catalog;
pub use types::{FieldSubstitution, ParsedCatalog};
