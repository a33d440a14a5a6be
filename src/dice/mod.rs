mod die;
mod face;
mod view;
mod weight;

pub use die::*;
pub use face::*;
pub use view::*;
pub use weight::*;
