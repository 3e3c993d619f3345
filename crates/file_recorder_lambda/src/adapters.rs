pub mod object_store;
pub mod record_table;
