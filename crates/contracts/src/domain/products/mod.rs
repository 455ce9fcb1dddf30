pub mod aggregate;

pub use aggregate::{Category, CreateProductDto, DeleteResult, Product, UpdateProductDto};
