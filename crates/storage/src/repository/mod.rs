pub mod category;
pub mod checkpoint;
pub mod competitor;
pub mod enduro;
pub mod time_record;

pub use category::CategoryRepository;
pub use checkpoint::CheckpointRepository;
pub use competitor::CompetitorRepository;
pub use enduro::EnduroRepository;
pub use time_record::TimeRecordRepository;
