mod r#impl;
mod structs;

pub use r#impl::Listener;
pub use structs::*;
