pub mod availability;
pub mod catalog;
pub mod comparator;
pub mod room;
pub mod room_store;
pub mod scanner;
pub mod time_label;
