pub mod start_list;
