pub mod adapters;
pub mod application;
pub mod console;
pub mod domain;
pub mod ports;
