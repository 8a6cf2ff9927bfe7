use contracts::enums::upload_module::UploadModule;
use contracts::usecases::u501_bulk_upload::request::ACCEPTED_EXTENSIONS;
use contracts::usecases::u501_bulk_upload::response::UploadResult;
use thiserror::Error;

use crate::shared::api_error::ApiError;

pub const GENERIC_UPLOAD_ERROR: &str = "Error processing file";

/// Local validation failures; none of them reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadValidationError {
    #[error("Please select a valid CSV or TXT file")]
    UnsupportedFile,
    #[error("Please select a file first")]
    NoFileSelected,
    #[error("An upload is already in progress")]
    AlreadyUploading,
}

/// `true` if the name ends with one of the accepted extensions (case-sensitive).
pub fn is_accepted_file_name(name: &str) -> bool {
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// A file picked by the user. `F` is the browser handle in the app and
/// anything cheap in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSelection<F> {
    pub name: String,
    pub size: u64,
    pub handle: F,
}

impl<F> UploadSelection<F> {
    pub fn new(name: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Uploading,
    /// `module` is the one the file was actually sent to
    Done {
        module: UploadModule,
        result: UploadResult,
    },
    Failed(String),
}

/// The single upload call the page must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket<F> {
    pub seq: u64,
    pub module: UploadModule,
    pub handle: F,
}

/// Upload orchestrator: file selection, module choice and one upload at a time.
#[derive(Debug, Clone)]
pub struct UploadState<F> {
    module: UploadModule,
    selection: Option<UploadSelection<F>>,
    phase: UploadPhase,
    validation_error: Option<UploadValidationError>,
    latest_seq: u64,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            module: UploadModule::default(),
            selection: None,
            phase: UploadPhase::Idle,
            validation_error: None,
            latest_seq: 0,
        }
    }
}

impl<F: Clone> UploadState<F> {
    pub fn module(&self) -> UploadModule {
        self.module
    }

    pub fn selection(&self) -> Option<&UploadSelection<F>> {
        self.selection.as_ref()
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.phase, UploadPhase::Uploading)
    }

    /// Whether "Process File" should be enabled
    pub fn can_submit(&self) -> bool {
        self.selection.is_some() && !self.is_uploading()
    }

    /// Entry point for the file picker, the drop area and the native input.
    ///
    /// Refused while an upload runs, so its result still reaches the page.
    /// Otherwise any previous result is dropped.
    pub fn select_file(
        &mut self,
        selection: UploadSelection<F>,
    ) -> Result<(), UploadValidationError> {
        if self.is_uploading() {
            return Err(UploadValidationError::AlreadyUploading);
        }
        self.latest_seq += 1;
        self.phase = UploadPhase::Idle;

        if !is_accepted_file_name(&selection.name) {
            return self.reject_selection();
        }

        self.selection = Some(selection);
        self.validation_error = None;
        Ok(())
    }

    /// A drop that carried no file at all (dragged text, links).
    pub fn select_nothing(&mut self) -> Result<(), UploadValidationError> {
        if self.is_uploading() {
            return Err(UploadValidationError::AlreadyUploading);
        }
        self.latest_seq += 1;
        self.phase = UploadPhase::Idle;
        self.reject_selection()
    }

    fn reject_selection(&mut self) -> Result<(), UploadValidationError> {
        self.selection = None;
        self.validation_error = Some(UploadValidationError::UnsupportedFile);
        Err(UploadValidationError::UnsupportedFile)
    }

    /// Start the upload of the current selection.
    pub fn submit(&mut self) -> Result<UploadTicket<F>, UploadValidationError> {
        if self.is_uploading() {
            return Err(UploadValidationError::AlreadyUploading);
        }
        let Some(selection) = &self.selection else {
            self.validation_error = Some(UploadValidationError::NoFileSelected);
            return Err(UploadValidationError::NoFileSelected);
        };

        self.latest_seq += 1;
        let ticket = UploadTicket {
            seq: self.latest_seq,
            module: self.module,
            handle: selection.handle.clone(),
        };
        self.validation_error = None;
        self.phase = UploadPhase::Uploading;
        Ok(ticket)
    }

    /// Apply the outcome of ticket `seq`. Returns `false` if it was stale.
    pub fn resolve(
        &mut self,
        seq: u64,
        module: UploadModule,
        outcome: Result<UploadResult, ApiError>,
    ) -> bool {
        if seq != self.latest_seq || !self.is_uploading() {
            return false;
        }
        self.phase = match outcome {
            Ok(result) => UploadPhase::Done { module, result },
            Err(e) => UploadPhase::Failed(e.user_message(GENERIC_UPLOAD_ERROR)),
        };
        true
    }

    /// Reset selection, result and error.
    pub fn clear(&mut self) {
        self.latest_seq += 1;
        self.selection = None;
        self.phase = UploadPhase::Idle;
        self.validation_error = None;
    }

    /// Takes effect on the next `submit`; a running upload is left alone.
    pub fn change_module(&mut self, module: UploadModule) {
        self.module = module;
        self.validation_error = None;
        if !self.is_uploading() {
            self.phase = UploadPhase::Idle;
        }
    }

    pub fn result(&self) -> Option<(UploadModule, &UploadResult)> {
        match &self.phase {
            UploadPhase::Done { module, result } => Some((*module, result)),
            _ => None,
        }
    }

    /// Validation error or transport/server failure, whichever is current
    pub fn error_message(&self) -> Option<String> {
        if let Some(e) = &self.validation_error {
            return Some(e.to_string());
        }
        match &self.phase {
            UploadPhase::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = UploadState<&'static str>;

    fn file(name: &str) -> UploadSelection<&'static str> {
        UploadSelection::new(name, 42, "handle")
    }

    #[test]
    fn test_extension_policy_is_case_sensitive() {
        let mut state = State::default();

        assert_eq!(
            state.select_file(file("report.pdf")),
            Err(UploadValidationError::UnsupportedFile)
        );
        assert!(state.selection().is_none());
        assert_eq!(
            state.error_message().as_deref(),
            Some("Please select a valid CSV or TXT file")
        );

        assert_eq!(state.select_file(file("report.csv")), Ok(()));
        assert_eq!(state.selection().map(|s| s.name.as_str()), Some("report.csv"));
        assert_eq!(state.error_message(), None);

        assert_eq!(state.select_file(file("report.txt")), Ok(()));
        assert!(state.select_file(file("report.TXT")).is_err());
        assert!(state.select_file(file("report.Csv")).is_err());
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_submit_without_selection_fails_fast() {
        let mut state = State::default();
        assert_eq!(state.submit(), Err(UploadValidationError::NoFileSelected));
        assert_eq!(state.phase(), &UploadPhase::Idle);
        assert_eq!(
            state.error_message().as_deref(),
            Some("Please select a file first")
        );
    }

    #[test]
    fn test_rejected_file_cannot_be_submitted() {
        let mut state = State::default();
        state.select_file(file("good.csv")).unwrap();
        let _ = state.select_file(file("bad.xlsx"));
        assert_eq!(state.submit(), Err(UploadValidationError::NoFileSelected));
    }

    #[test]
    fn test_module_b_upload_renders_counts_and_errors() {
        let mut state = State::default();
        state.change_module(UploadModule::B);
        state.select_file(file("contribuintes.csv")).unwrap();

        let ticket = state.submit().unwrap();
        assert_eq!(ticket.module, UploadModule::B);
        assert!(state.is_uploading());
        assert!(!state.can_submit());
        assert_eq!(state.submit(), Err(UploadValidationError::AlreadyUploading));

        let response = UploadResult {
            success_count: 3,
            error_count: 1,
            errors: vec!["row 4: invalid CPF".to_string()],
        };
        assert!(state.resolve(ticket.seq, ticket.module, Ok(response)));

        let (module, result) = state.result().unwrap();
        assert_eq!(module, UploadModule::B);
        assert_eq!(result.success_count, 3);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.errors, vec!["row 4: invalid CPF".to_string()]);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_transport_failure_is_generic() {
        let mut state = State::default();
        state.select_file(file("a.txt")).unwrap();
        let ticket = state.submit().unwrap();
        state.resolve(
            ticket.seq,
            ticket.module,
            Err(ApiError::Transport("Failed to fetch".into())),
        );
        assert_eq!(state.error_message().as_deref(), Some(GENERIC_UPLOAD_ERROR));
        assert!(state.result().is_none());
        assert!(state.can_submit());
    }

    #[test]
    fn test_server_detail_is_surfaced() {
        let mut state = State::default();
        state.select_file(file("a.txt")).unwrap();
        let ticket = state.submit().unwrap();
        state.resolve(
            ticket.seq,
            ticket.module,
            Err(ApiError::Server {
                status: 400,
                detail: Some("File must be CSV or TXT".into()),
            }),
        );
        assert_eq!(state.error_message().as_deref(), Some("File must be CSV or TXT"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let ticket = state.submit().unwrap();
        state.resolve(ticket.seq, ticket.module, Ok(UploadResult::default()));

        state.clear();
        let after_one = (
            state.selection().cloned(),
            state.phase().clone(),
            state.error_message(),
        );
        state.clear();
        let after_two = (
            state.selection().cloned(),
            state.phase().clone(),
            state.error_message(),
        );

        assert_eq!(after_one, (None, UploadPhase::Idle, None));
        assert_eq!(after_one, after_two);
    }

    #[test]
    fn test_clear_detaches_running_upload() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let ticket = state.submit().unwrap();
        state.clear();
        assert!(!state.resolve(ticket.seq, ticket.module, Ok(UploadResult::default())));
        assert_eq!(state.phase(), &UploadPhase::Idle);
    }

    #[test]
    fn test_selection_refused_while_uploading() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let first = state.submit().unwrap();

        assert_eq!(
            state.select_file(file("b.csv")),
            Err(UploadValidationError::AlreadyUploading)
        );
        assert_eq!(state.select_nothing(), Err(UploadValidationError::AlreadyUploading));
        assert!(state.is_uploading());
        assert!(!state.can_submit());
        assert_eq!(state.submit(), Err(UploadValidationError::AlreadyUploading));
        assert_eq!(state.selection().map(|s| s.name.as_str()), Some("a.csv"));

        let response = UploadResult {
            success_count: 3,
            error_count: 0,
            errors: vec![],
        };
        assert!(state.resolve(first.seq, first.module, Ok(response)));
        assert_eq!(state.result().map(|(_, r)| r.success_count), Some(3));
    }

    #[test]
    fn test_drop_without_file_is_rejected() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();

        assert_eq!(state.select_nothing(), Err(UploadValidationError::UnsupportedFile));
        assert!(state.selection().is_none());
        assert_eq!(
            state.error_message().as_deref(),
            Some("Please select a valid CSV or TXT file")
        );
        assert!(!state.can_submit());
    }

    #[test]
    fn test_change_module_clears_result_without_resubmitting() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let ticket = state.submit().unwrap();
        state.resolve(ticket.seq, ticket.module, Ok(UploadResult::default()));
        assert!(state.result().is_some());

        state.change_module(UploadModule::B);
        assert!(state.result().is_none());
        assert_eq!(state.phase(), &UploadPhase::Idle);
        assert_eq!(state.module(), UploadModule::B);
        assert!(state.selection().is_some());
    }

    #[test]
    fn test_change_module_during_upload_keeps_original_module() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let ticket = state.submit().unwrap();
        state.change_module(UploadModule::B);
        assert!(state.is_uploading());

        state.resolve(ticket.seq, ticket.module, Ok(UploadResult::default()));
        assert_eq!(state.result().map(|(m, _)| m), Some(UploadModule::A));
    }

    #[test]
    fn test_new_selection_drops_previous_result() {
        let mut state = State::default();
        state.select_file(file("a.csv")).unwrap();
        let ticket = state.submit().unwrap();
        state.resolve(ticket.seq, ticket.module, Ok(UploadResult::default()));

        state.select_file(file("b.csv")).unwrap();
        assert!(state.result().is_none());
    }
}
