pub mod category;
pub mod checkpoint;
pub mod competitor;
pub mod enduro;
