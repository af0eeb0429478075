pub mod cli;
pub mod commands;
pub mod layout;
pub mod motif;
pub mod seq;
pub mod utils;
