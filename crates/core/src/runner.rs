//! Script runner: resolves a script, composes the interpreter command and
//! hands it to the executor

use crate::{
    cache::ResolutionCache,
    command::ScriptCommand,
    config::{Config, ExecutionMode},
    error::Result,
    interfaces::{CommandExecutor, InterpreterPath, PathResolver},
    resolver::{DEFAULT_EXTENSION, ScriptResolver},
    services::{NodeCommandPath, ProcessExecutor, ShellExecutor},
};
use std::path::PathBuf;
use tracing::debug;

/// Runs scripts found in a list of search directories.
///
/// The interpreter provider and executor are optional; whichever is missing
/// is created on first use and kept for the life of the runner.
pub struct ScriptRunner {
    node: Option<Box<dyn InterpreterPath>>,
    executor: Option<Box<dyn CommandExecutor>>,
    execution: ExecutionMode,
    resolver: ScriptResolver,
}

impl ScriptRunner {
    /// Runner with default collaborators and no search directories
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ScriptRunnerBuilder {
        ScriptRunnerBuilder::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::builder()
            .js_dirs(config.js_dirs.iter().cloned())
            .default_extension(config.default_extension.clone())
            .execution(config.execution);
        if let Some(node) = &config.node {
            builder = builder.node_path(node.clone());
        }
        builder.build()
    }

    /// Run `script` with `args` and return its captured output.
    ///
    /// Executor failures are returned as-is.
    pub fn run<S: AsRef<str>>(&mut self, script: &str, args: &[S]) -> Result<String> {
        let command = self.command_for(script, args)?;
        debug!("Composed command: {}", command);
        self.executor().execute(&command)
    }

    /// Resolve `script` against the search directories, using the cache
    pub fn resolve(&mut self, script: &str) -> Result<PathBuf> {
        self.resolver.resolve(script)
    }

    /// Compose the command `run` would execute, without executing it
    pub fn command_for<S: AsRef<str>>(
        &mut self,
        script: &str,
        args: &[S],
    ) -> Result<ScriptCommand> {
        let program = self.interpreter().command_path();
        let script = self.resolve(script)?;
        let args = args.iter().map(|arg| arg.as_ref().to_string()).collect();
        Ok(ScriptCommand::new(program, script, args))
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        self.resolver.search_dirs()
    }

    pub fn cached_resolutions(&self) -> &ResolutionCache {
        self.resolver.cache()
    }

    fn interpreter(&mut self) -> &dyn InterpreterPath {
        &**self.node.get_or_insert_with(default_interpreter)
    }

    fn executor(&mut self) -> &dyn CommandExecutor {
        let execution = self.execution;
        &**self
            .executor
            .get_or_insert_with(|| default_executor(execution))
    }
}

fn default_interpreter() -> Box<dyn InterpreterPath> {
    Box::new(NodeCommandPath::new())
}

fn default_executor(execution: ExecutionMode) -> Box<dyn CommandExecutor> {
    match execution {
        ExecutionMode::Direct => Box::new(ProcessExecutor::new()),
        ExecutionMode::Shell => Box::new(ShellExecutor::new()),
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction-time options for a [`ScriptRunner`]
pub struct ScriptRunnerBuilder {
    node: Option<Box<dyn InterpreterPath>>,
    executor: Option<Box<dyn CommandExecutor>>,
    execution: ExecutionMode,
    js_dirs: Vec<PathBuf>,
    default_extension: String,
    path_resolver: Option<Box<dyn PathResolver>>,
}

impl Default for ScriptRunnerBuilder {
    fn default() -> Self {
        Self {
            node: None,
            executor: None,
            execution: ExecutionMode::default(),
            js_dirs: Vec::new(),
            default_extension: DEFAULT_EXTENSION.to_string(),
            path_resolver: None,
        }
    }
}

impl ScriptRunnerBuilder {
    pub fn node(mut self, node: impl InterpreterPath + 'static) -> Self {
        self.node = Some(Box::new(node));
        self
    }

    pub fn node_path(self, path: impl Into<String>) -> Self {
        self.node(NodeCommandPath::with_path(path))
    }

    pub fn executor(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.executor = Some(Box::new(executor));
        self
    }

    /// Which default executor to create when none was given
    pub fn execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    pub fn js_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.js_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn js_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.js_dirs.push(dir.into());
        self
    }

    pub fn default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = extension.into();
        self
    }

    pub fn path_resolver(mut self, path_resolver: impl PathResolver + 'static) -> Self {
        self.path_resolver = Some(Box::new(path_resolver));
        self
    }

    pub fn build(self) -> ScriptRunner {
        let mut resolver =
            ScriptResolver::new(self.js_dirs).with_default_extension(self.default_extension);
        if let Some(path_resolver) = self.path_resolver {
            resolver = resolver.with_path_resolver(path_resolver);
        }

        ScriptRunner {
            node: self.node,
            executor: self.executor,
            execution: self.execution,
            resolver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct RecordingExecutor {
        commands: Arc<Mutex<Vec<ScriptCommand>>>,
    }

    impl RecordingExecutor {
        fn recorded(&self) -> Vec<ScriptCommand> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl CommandExecutor for RecordingExecutor {
        fn execute(&self, command: &ScriptCommand) -> Result<String> {
            self.commands.lock().unwrap().push(command.clone());
            Ok(format!("ran {}", command.script().display()))
        }
    }

    struct FailingExecutor;

    impl CommandExecutor for FailingExecutor {
        fn execute(&self, command: &ScriptCommand) -> Result<String> {
            Err(Error::CommandFailed {
                command: command.to_shell_command(),
                exit_code: Some(1),
                detail: "exited with status 1".to_string(),
            })
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_run_composes_and_returns_executor_output() {
        let temp_dir = TempDir::new().unwrap();
        let js = temp_dir.path().join("js");
        fs::create_dir_all(&js).unwrap();
        fs::write(js.join("script.js"), "").unwrap();

        let executor = RecordingExecutor::default();
        let mut runner = ScriptRunner::builder()
            .node_path("node")
            .executor(executor.clone())
            .js_dirs([js.clone(), js.join("subdir")])
            .build();

        let output = runner.run("script", &["a", "b c"]).unwrap();
        assert_eq!(output, format!("ran {}", js.join("script.js").display()));

        let recorded = executor.recorded();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].program(), "node");
        assert_eq!(recorded[0].script(), js.join("script.js"));
        assert_eq!(
            recorded[0].to_shell_command(),
            format!("node {} 'a' 'b c'", js.join("script.js").display())
        );
    }

    #[test]
    fn test_unresolved_script_runs_by_bare_name() {
        let executor = RecordingExecutor::default();
        let mut runner = ScriptRunner::builder().executor(executor.clone()).build();

        runner.run::<&str>("tool", &[]).unwrap();
        assert_eq!(executor.recorded()[0].to_shell_command(), "node tool.js");
    }

    #[cfg(unix)]
    #[test]
    fn test_failure_propagates_unchanged() {
        let mut runner = ScriptRunner::builder().executor(FailingExecutor).build();
        let err = runner.run("script", &["x"]).unwrap_err();
        match err {
            Error::CommandFailed {
                command, exit_code, ..
            } => {
                assert_eq!(command, "node script.js 'x'");
                assert_eq!(exit_code, Some(1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_collaborators_created_lazily() {
        let mut runner = ScriptRunner::new();
        assert!(runner.node.is_none());
        assert!(runner.executor.is_none());

        runner.command_for::<&str>("script", &[]).unwrap();
        assert!(runner.node.is_some());
        assert!(runner.executor.is_none());

        let executor_addr = |runner: &ScriptRunner| {
            runner
                .executor
                .as_deref()
                .map(|executor| executor as *const dyn CommandExecutor as *const ())
        };
        runner.executor();
        let first = executor_addr(&runner);
        runner.executor();
        assert!(first.is_some());
        assert_eq!(first, executor_addr(&runner));
    }

    #[test]
    fn test_resolution_is_cached_per_runner() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("script.js"), "").unwrap();

        let mut runner = ScriptRunner::builder()
            .executor(RecordingExecutor::default())
            .js_dir(temp_dir.path())
            .build();
        runner.run::<&str>("script", &[]).unwrap();
        runner.run::<&str>("script.js", &[]).unwrap();
        runner.run::<&str>("other", &[]).unwrap();

        let cache = runner.cached_resolutions();
        assert_eq!(cache.len(), 2);
        let found = temp_dir.path().join("script.js");
        assert_eq!(cache.get("script.js"), Some(found.as_path()));
        assert_eq!(cache.get("other.js"), Some(std::path::Path::new("other.js")));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_config() {
        let config = Config {
            node: Some("/opt/node/bin/node".to_string()),
            js_dirs: vec![PathBuf::from("./js")],
            default_extension: "mjs".to_string(),
            execution: ExecutionMode::Shell,
        };

        let mut runner = ScriptRunner::from_config(&config);
        assert_eq!(runner.search_dirs(), &[PathBuf::from("./js")]);
        assert_eq!(runner.execution, ExecutionMode::Shell);

        let command = runner.command_for("task", &["1"]).unwrap();
        assert_eq!(command.to_shell_command(), "/opt/node/bin/node task.mjs '1'");
    }
}
