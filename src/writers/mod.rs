pub mod database_writer;
pub mod schema;

pub use database_writer::DatabaseWriter;
