pub mod init;
pub mod resolve;
pub mod run;

pub use init::init_command;
pub use resolve::resolve_command;
pub use run::run_command;
