pub mod connection;
pub mod conversations;
pub mod query;

pub use conversations::RemoteQueryStore;
