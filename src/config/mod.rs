pub mod load;
pub mod types;

pub use types::{NamingTable, StemSubstitution};
