pub mod assemble;
pub mod collect;
pub mod export;
pub mod log;
pub mod navigate;
pub mod scrape;


pub use assemble::*;
pub use collect::*;
pub use export::*;
pub use log::*;
pub use navigate::*;
pub use scrape::*;
