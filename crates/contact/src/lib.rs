mod compose;
mod relay;
mod submission;

pub use compose::*;
pub use relay::*;
pub use submission::*;
