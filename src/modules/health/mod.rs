// Health module

pub mod controllers;

pub use controllers::configure;
