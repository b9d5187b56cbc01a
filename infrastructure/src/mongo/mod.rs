//! MongoDB adapter for the backend administrative port

pub mod adapter;

pub use adapter::MongoBackendAdmin;
