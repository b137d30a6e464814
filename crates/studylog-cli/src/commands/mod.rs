pub mod import;
pub mod misc;
pub mod projects;
pub mod sessions;
pub mod stats;
pub mod todos;
