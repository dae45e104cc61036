mod config;
mod homepage;
mod language;
mod site;
mod user;

pub use self::config::*;
pub use self::homepage::*;
pub use self::language::*;
pub use self::site::*;
pub use self::user::*;

pub type RelPath = relative_path::RelativePathBuf;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
