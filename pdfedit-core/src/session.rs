// ============================================================================
// pdfedit-core/src/session.rs
// ============================================================================
//
// SESSION: One Invocation from Tokens to Exit Status
//
// A Session owns the configuration and the two side-effect capabilities
// (command runner and filesystem) and drives one subcommand through:
//
//   availability check -> arity check -> option scan -> build -> run
//
// At most two processes are launched per session, strictly one after the
// other: the `--version` probe and the subcommand's own command.

use crate::config::CoreConfig;
use crate::error::{CoreResult, usage_error};
use crate::external::{
    CommandRunner, ExecutionResult, ExternalCommand, FileSystem, ToolProbe, ensure_available,
};
use crate::operations::Operation;
use crate::options::scan_options;

/// Drives subcommands against a runner and a filesystem.
pub struct Session<R: CommandRunner, F: FileSystem> {
    config: CoreConfig,
    runner: R,
    fs: F,
}

impl<R: CommandRunner, F: FileSystem> Session<R, F> {
    pub fn new(config: CoreConfig, runner: R, fs: F) -> Self {
        Self { config, runner, fs }
    }

    /// Probes the configured tool with `--version`.
    pub fn ensure_tool_available(&self) -> CoreResult<()> {
        let probe = ToolProbe::new(&self.runner, &self.config.tool)
            .show_output(self.config.show_probe_output);
        ensure_available(&probe, &self.config.tool)
    }

    /// Turns subcommand tokens into the external command, without running it.
    ///
    /// For `split` this creates the output directory.
    pub fn prepare<S: AsRef<str>>(&self, operation: Operation, tokens: &[S]) -> CoreResult<ExternalCommand> {
        if tokens.len() < operation.min_tokens() {
            return Err(usage_error(format!(
                "{} expects at least {} arguments, got {}",
                operation,
                operation.min_tokens(),
                tokens.len()
            )));
        }

        let options = scan_options(tokens, operation)?;
        operation.build(&options, &self.config.tool, &self.fs)
    }

    /// Runs one subcommand end to end.
    ///
    /// `Err` means nothing was run for the subcommand (the probe may have
    /// been). `Ok` carries the tool's outcome, successful or not.
    pub fn execute<S: AsRef<str>>(&self, operation: Operation, tokens: &[S]) -> CoreResult<ExecutionResult> {
        if self.config.check_tool {
            self.ensure_tool_available()?;
        }

        let command = self.prepare(operation, tokens)?;
        log::debug!("Built {} command: {:?}", operation, command.get_args());

        let result = self.runner.run(&command);
        if !result.success() {
            log::error!("{} {}", command.program(), result);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoreConfigBuilder;
    use crate::error::CoreError;
    use crate::external::mocks::{Journal, MockEvent, MockFileSystem, MockRunner};
    use std::path::PathBuf;

    fn session(runner: &MockRunner, fs: &MockFileSystem) -> Session<MockRunner, MockFileSystem> {
        Session::new(CoreConfig::default(), runner.clone(), fs.clone())
    }

    #[test]
    fn test_execute_probes_then_runs() {
        let runner = MockRunner::new();
        let fs = MockFileSystem::new();
        let result = session(&runner, &fs)
            .execute(Operation::Merge, &["-o", "out.pdf", "a.pdf", "b.pdf"])
            .unwrap();

        assert_eq!(result, ExecutionResult::Exited(0));
        let calls = runner.received_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].get_args(), ["--version"]);
        assert_eq!(
            calls[1].get_args(),
            ["--empty", "--pages", "a.pdf", "b.pdf", "--", "out.pdf"]
        );
    }

    #[test]
    fn test_failed_probe_runs_nothing_else() {
        let journal = Journal::new();
        let runner = MockRunner::with_journal(&journal);
        runner.push_result(ExecutionResult::Exited(1));
        let fs = MockFileSystem::with_journal(&journal);

        let err = Session::new(CoreConfig::default(), runner.clone(), fs.clone())
            .execute(Operation::Split, &["-o", "pages", "book.pdf"])
            .unwrap_err();

        assert!(matches!(err, CoreError::DependencyNotFound(ref tool) if tool == "qpdf"));
        assert_eq!(runner.received_calls().len(), 1);
        assert!(fs.created_dirs().is_empty());
        assert_eq!(journal.events().len(), 1);
    }

    #[test]
    fn test_probe_launch_failure_is_missing_dependency() {
        let runner = MockRunner::new();
        runner.push_result(ExecutionResult::LaunchFailed);
        let err = session(&runner, &MockFileSystem::new())
            .execute(Operation::Rotate, &["-o", "o.pdf", "-r", "90", "in.pdf"])
            .unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(_)));
    }

    #[test]
    fn test_validation_error_runs_no_command() {
        let runner = MockRunner::new();
        let config = CoreConfigBuilder::new().check_tool(false).build();
        let session = Session::new(config, runner.clone(), MockFileSystem::new());

        let err = session
            .execute(Operation::Rotate, &["-o", "o.pdf", "-r", "45", "in.pdf"])
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { operation: Operation::Rotate, .. }));

        assert!(session.execute(Operation::Merge, &["-o", "o.pdf", "a.pdf", "b.pdf"]).is_ok());

        let err = session.execute(Operation::Merge, &["a.pdf", "b.pdf", "c.pdf"]).unwrap_err();
        assert!(matches!(err, CoreError::Validation { operation: Operation::Merge, .. }));

        // Only the one valid merge reached the runner
        assert_eq!(runner.received_calls().len(), 1);
    }

    #[test]
    fn test_too_few_tokens_is_usage_error() {
        let runner = MockRunner::new();
        let err = session(&runner, &MockFileSystem::new())
            .execute(Operation::Merge, &["-o", "out.pdf"])
            .unwrap_err();
        assert!(err.wants_usage());
        // The probe ran, the merge did not
        assert_eq!(runner.received_calls().len(), 1);

        let err = session(&runner, &MockFileSystem::new())
            .prepare(Operation::Move, &["-o", "out.pdf", "in.pdf"])
            .unwrap_err();
        assert!(err.wants_usage());
    }

    #[test]
    fn test_split_creates_directory_before_running() {
        let journal = Journal::new();
        let runner = MockRunner::with_journal(&journal);
        let fs = MockFileSystem::with_journal(&journal);
        let session = Session::new(CoreConfig::default(), runner, fs);

        session.execute(Operation::Split, &["-o", "out/pages", "book.pdf"]).unwrap();

        let events = journal.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], MockEvent::Run(cmd) if cmd.get_args() == ["--version"]));
        assert_eq!(events[1], MockEvent::CreateDir(PathBuf::from("out/pages")));
        assert!(matches!(&events[2], MockEvent::Run(cmd) if cmd.get_args()[0] == "--split-pages"));
    }

    #[test]
    fn test_tool_failure_is_propagated() {
        let runner = MockRunner::new();
        runner.push_result(ExecutionResult::Exited(0));
        runner.push_result(ExecutionResult::Exited(2));
        let result = session(&runner, &MockFileSystem::new())
            .execute(Operation::Move, &["-o", "out.pdf", "-p", "3,1,2", "in.pdf"])
            .unwrap();
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn test_custom_tool_is_used_everywhere() {
        let runner = MockRunner::new();
        let config = CoreConfigBuilder::new().tool("/opt/qpdf/bin/qpdf").build();
        Session::new(config, runner.clone(), MockFileSystem::new())
            .execute(Operation::Rotate, &["-o", "o.pdf", "-r", "180", "in.pdf"])
            .unwrap();
        assert!(runner.received_calls().iter().all(|c| c.program() == "/opt/qpdf/bin/qpdf"));
    }

    #[test]
    fn test_flag_without_value_is_validation_error() {
        let runner = MockRunner::new();
        let config = CoreConfigBuilder::new().check_tool(false).build();
        let err = Session::new(config, runner.clone(), MockFileSystem::new())
            .execute(Operation::Rotate, &["in.pdf", "-o", "o.pdf", "-r"])
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation { operation: Operation::Rotate, .. }));
        assert!(!err.wants_usage());
        assert!(runner.received_calls().is_empty());
    }

    #[test]
    fn test_unknown_option_is_usage_error() {
        let runner = MockRunner::new();
        let config = CoreConfigBuilder::new().check_tool(false).build();
        let err = Session::new(config, runner.clone(), MockFileSystem::new())
            .execute(Operation::Merge, &["-o", "out.pdf", "--verbose", "a.pdf", "b.pdf"])
            .unwrap_err();
        assert!(err.wants_usage());
        assert!(runner.received_calls().is_empty());
    }
}
