pub mod expand;
pub mod off_targets;
pub mod tables;
