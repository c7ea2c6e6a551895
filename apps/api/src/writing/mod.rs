// Long-form writing: cover letters and personal statements (plain-text output).

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
