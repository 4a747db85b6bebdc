mod execute;

pub use execute::{execute_alias, execute_asset};
