// Interview preparation: question sets, per-question answer tips, and mock
// interview feedback.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
