//! Interpreter path provider interface

/// Supplies the leading token of a composed command line: an absolute path
/// to the interpreter or a bare executable name resolved through `PATH`.
pub trait InterpreterPath: Send + Sync {
    fn command_path(&self) -> String;
}
