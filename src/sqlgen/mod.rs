mod gen;
mod gen_error;
mod models;

pub use gen::{escape_sql, generate_inserts, run};
pub use gen_error::GenError;
pub use models::CsvListing;
