mod execute;
mod helpers;

pub use execute::execute;
pub use helpers::render;
