pub mod loader;
pub mod pager;
pub mod reporters;
pub mod session;
pub mod stats;
