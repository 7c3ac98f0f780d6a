// pdfedit-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for this crate's unit tests only.

use super::{CommandRunner, ExecutionResult, ExternalCommand, FileSystem};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// One observable side effect recorded by the mocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    CreateDir(PathBuf),
    Run(ExternalCommand),
}

/// Shared, ordered record of side effects across several mocks.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<MockEvent>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<MockEvent> {
        self.0.borrow().clone()
    }

    fn push(&self, event: MockEvent) {
        self.0.borrow_mut().push(event);
    }
}

/// Mock implementation of CommandRunner.
///
/// Returns queued results in order; once the queue is empty every run
/// succeeds with `Exited(0)`.
#[derive(Clone, Default)]
pub struct MockRunner {
    results: Rc<RefCell<VecDeque<ExecutionResult>>>,
    received_calls: Rc<RefCell<Vec<ExternalCommand>>>,
    journal: Option<Journal>,
}

impl MockRunner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            journal: Some(journal.clone()),
            ..Default::default()
        }
    }

    /// Queues the result for the next unanswered run.
    pub fn push_result(&self, result: ExecutionResult) {
        self.results.borrow_mut().push_back(result);
    }

    pub fn received_calls(&self) -> Vec<ExternalCommand> {
        self.received_calls.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &ExternalCommand) -> ExecutionResult {
        log::info!("MockRunner: {}", command);
        self.received_calls.borrow_mut().push(command.clone());
        if let Some(journal) = &self.journal {
            journal.push(MockEvent::Run(command.clone()));
        }
        self.results
            .borrow_mut()
            .pop_front()
            .unwrap_or(ExecutionResult::Exited(0))
    }
}

/// Mock implementation of FileSystem that records directory creation
/// without touching the disk.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    created: Rc<RefCell<Vec<PathBuf>>>,
    fail_with: Option<String>,
    journal: Option<Journal>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_journal(journal: &Journal) -> Self {
        Self {
            journal: Some(journal.clone()),
            ..Default::default()
        }
    }

    /// Makes every directory creation fail with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created.borrow().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(CoreError::PathError(format!(
                "Failed to create directory '{}': {}",
                path.display(),
                message
            )));
        }
        self.created.borrow_mut().push(path.to_path_buf());
        if let Some(journal) = &self.journal {
            journal.push(MockEvent::CreateDir(path.to_path_buf()));
        }
        Ok(())
    }
}
