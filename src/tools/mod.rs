// Pipeline stages
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod recommend;
pub mod render;
