pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryUserRepository;
pub use models::user::{NewUser, User, UserRecord};
pub use postgres::PgUserRepository;
pub use repository::{StoreError, UserRepository};
