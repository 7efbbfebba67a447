pub mod cli;
pub mod manifest;
pub mod progress;
pub mod tools;
pub mod update;
pub mod utils;
