//! Driver Repository Adapters

mod in_memory;
mod postgres;

pub use in_memory::InMemoryDriverRepository;
pub use postgres::PostgresDriverRepository;
