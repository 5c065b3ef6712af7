// Repositories module - in-memory indexes owned by the service

pub mod catalog;
pub mod order_book;

pub use catalog::Catalog;
pub use order_book::OrderBook;
