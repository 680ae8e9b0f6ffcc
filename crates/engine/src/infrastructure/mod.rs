pub mod diagnostics;
pub mod persistence;
pub mod ports;
pub mod settings;
