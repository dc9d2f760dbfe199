mod question;
mod results;
mod setup;

pub use self::question::*;
pub use self::results::*;
pub use self::setup::*;
