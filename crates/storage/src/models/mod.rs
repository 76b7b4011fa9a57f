pub mod category;
pub mod checkpoint;
pub mod competitor;
pub mod enduro;
pub mod time_record;

pub use category::Category;
pub use checkpoint::Checkpoint;
pub use competitor::{Competitor, CompetitorWithCategory};
pub use enduro::Enduro;
pub use time_record::TimeRecord;
