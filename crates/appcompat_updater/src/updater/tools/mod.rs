pub mod archive;
pub mod fetch;
pub mod runner;
pub mod vcs;
