mod execute;

pub use execute::execute;
