pub mod document;
pub mod error;

pub mod armature;
pub mod batch;
pub mod output;
pub mod skeleton;
