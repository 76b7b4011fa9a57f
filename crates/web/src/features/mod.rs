pub mod categories;
pub mod checkpoints;
pub mod competitors;
pub mod enduros;
pub mod start_list;
pub mod timing;
