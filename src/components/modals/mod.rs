pub mod helpers;
pub mod search;

pub use search::{SearchModal, SearchModalLayout};
