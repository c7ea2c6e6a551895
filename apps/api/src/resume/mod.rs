// Resume tasks: job-requirement extraction, resume structuring, match scoring,
// and optimization against a job description.
// All completions go through the pipeline — no direct client calls here.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
