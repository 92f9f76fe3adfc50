//! Shared types used by adapters and the repository layer.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationMeta, PaginationParams};
pub use response::{Created, NoContent};
