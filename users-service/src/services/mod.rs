pub mod database;
pub mod memory;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryUserStore;
pub use store::UserStore;
