pub mod error;
pub mod homepage;
pub mod markdown;
pub mod template;

pub use crate::error::Error;
pub use crate::error::Result;
pub use crate::homepage::Homepage;
pub use crate::template::render;
