pub mod assets;
pub mod purge;
