pub mod event_log;
pub mod process_table;
pub mod resource_view;
pub mod settings;
