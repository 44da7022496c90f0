//! Product repository adapters.

mod in_memory;

pub use in_memory::InMemoryProductRepository;
