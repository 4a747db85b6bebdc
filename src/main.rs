use basepath::utils::logger;
use basepath::ConfigError;
use std::process;

fn main() {
    if let Err(err) = basepath::run() {
        let title = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::InvalidConfig { .. }) => "Invalid build configuration",
            None => "basepath failed",
        };
        let causes: Vec<String> = err.chain().map(|cause| cause.to_string()).collect();
        logger::failure(title, &causes);
        process::exit(1);
    }
}
