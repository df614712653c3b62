pub mod environment;
pub mod process;

pub use environment::{check_command_exists, get_env_var, resolve_android_home, resolve_java_home};
pub use process::{run_command, run_command_in_dir, run_command_with_output};
