pub mod memory_content_store;
pub mod sqlx_content_store;
