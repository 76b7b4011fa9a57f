pub mod categories;
pub mod checkpoints;
pub mod competitors;
pub mod enduros;
pub mod layout;
pub mod start_list;
pub mod timing;

pub use layout::{error_page, index_page};
