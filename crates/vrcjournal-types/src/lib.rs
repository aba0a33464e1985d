pub mod activity;
pub mod filter;
pub mod instance;
pub mod photo;
mod util;

pub use activity::*;
pub use filter::*;
pub use instance::InstanceType;
pub use photo::*;
pub use util::*;
