pub mod echo;
pub mod interface;
pub mod tcp;
