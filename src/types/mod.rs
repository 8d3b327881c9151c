// Types layer - All data structures
pub mod catalog;
pub mod db;
pub mod dto;
pub mod internal;
