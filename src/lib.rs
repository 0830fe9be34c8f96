pub mod callback;
pub mod config;
pub mod error;
pub mod link;
pub mod order;
pub mod reader;
pub mod signature;
pub mod writer;
