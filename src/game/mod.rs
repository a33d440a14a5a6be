mod game;
mod outcomes;
mod record;
mod results;

pub use game::*;
pub use outcomes::*;
pub use record::*;
pub use results::*;
