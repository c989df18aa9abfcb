pub mod hashmap_reset_token_store;
pub mod hashmap_user_store;
pub mod postgres_reset_token_store;
pub mod postgres_user_store;

pub use hashmap_reset_token_store::HashMapResetTokenStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_reset_token_store::PostgresResetTokenStore;
pub use postgres_user_store::PostgresUserStore;
