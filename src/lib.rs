// Roadwatch: pothole report triage for social media posts
//
// This is the library root. Each module corresponds to one stage of the
// triage flow: load posts, classify them, print the summary.

pub mod classifier;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod posts;
