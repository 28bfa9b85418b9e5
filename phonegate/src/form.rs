//! The phone form: active country, masked phone text and validation.
//!
//! Every transition runs to completion on a single input event, so the fields
//! are always consistent when read back.

use log::{debug, info, warn};

use crate::{
    country::{CountryDirectory, CountrySelection},
    phone::{self, MAX_DIGITS},
    submission::{failure_message, SubmissionError, SubmissionOutcome, SubmissionRequest},
};

/// Product switches for behaviors that differed between revisions of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormPolicy {
    /// Select the first directory entry when the directory arrives and nothing is selected.
    pub auto_select_first: bool,
    /// Drop digits typed past the expected length instead of tracking up to [`MAX_DIGITS`].
    pub cap_digits: bool,
    /// Clear the phone field once the two-factor service accepted the number.
    pub reset_on_success: bool,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            auto_select_first: true,
            cap_digits: true,
            reset_on_success: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct PhoneForm {
    policy: FormPolicy,
    selection: Option<CountrySelection>,
    digits: String,
    display_text: String,
    validation_error: Option<String>,
    submission: SubmissionStatus,
}

impl PhoneForm {
    pub fn new(policy: FormPolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> FormPolicy {
        self.policy
    }

    pub fn selection(&self) -> Option<&CountrySelection> {
        self.selection.as_ref()
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn submission(&self) -> &SubmissionStatus {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionStatus::Pending
    }

    /// Makes `selection` the active country and clears the phone field.
    ///
    /// A pending submission is abandoned, its answer will be ignored.
    pub fn select_country(&mut self, selection: CountrySelection) {
        info!(
            "Selected country {} ({}), expecting {} digits",
            selection.record.name,
            selection.region_code,
            selection.expected_length()
        );
        self.selection = Some(selection);
        self.clear_phone();
        self.submission = SubmissionStatus::Idle;
    }

    /// Back to the state of a freshly mounted form, keeping the policy.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.clear_phone();
        self.submission = SubmissionStatus::Idle;
    }

    /// Default selection: the first entry of a newly arrived directory becomes
    /// the active country when nothing is selected yet.
    ///
    /// Returns the selection made, if any. Once it fired, a selection exists, so
    /// it cannot fire again until [`PhoneForm::clear_selection`].
    pub fn directory_loaded(&mut self, directory: &CountryDirectory) -> Option<CountrySelection> {
        if !self.policy.auto_select_first || self.selection.is_some() {
            return None;
        }
        let selection = directory.first_selection()?;
        debug!("Applying default country selection");
        self.select_country(selection.clone());
        Some(selection)
    }

    /// Reformats the phone field from the raw input text.
    ///
    /// Returns false, and changes nothing, if no country is selected.
    pub fn edit_phone(&mut self, input: &str) -> bool {
        let Some(expected) = self.selection.as_ref().map(|s| s.expected_length()) else {
            debug!("Ignoring phone input, no country selected");
            return false;
        };

        let mut candidate = phone::digits(input);
        candidate.truncate(if self.policy.cap_digits {
            expected
        } else {
            MAX_DIGITS
        });

        // No digits is the mount state: an empty field, not a lone "(".
        self.display_text = if candidate.is_empty() {
            String::new()
        } else {
            phone::format(&candidate, expected)
        };
        self.validation_error =
            (candidate.len() != expected).then(|| phone::length_error(expected));
        self.digits = candidate;
        self.settle_submission();
        true
    }

    pub fn placeholder(&self) -> String {
        phone::placeholder(self.selection.as_ref().map(|s| s.expected_length()))
    }

    /// Whether the submit trigger is enabled.
    ///
    /// This is an "at least" check while the validation error is an exact one:
    /// with uncapped digits a number can be submitted while still flagged.
    pub fn is_submit_eligible(&self) -> bool {
        match &self.selection {
            Some(selection) => self.digits.len() >= selection.expected_length(),
            None => false,
        }
    }

    /// Starts a submission if the form is eligible.
    ///
    /// A submission already pending does not prevent a new one, the host decides
    /// whether to disable its submit trigger meanwhile.
    pub fn begin_submit(&mut self) -> Option<SubmissionRequest> {
        if !self.is_submit_eligible() {
            debug!("Submission refused, form is not eligible");
            return None;
        }
        let selection = self.selection.as_ref()?;
        self.submission = SubmissionStatus::Pending;
        Some(SubmissionRequest {
            phone_digits: self.digits.clone(),
            country_id: selection.id().to_string(),
        })
    }

    /// Records the answer of the submission adapter to `request`.
    ///
    /// Returns false, and changes nothing, if the answer is stale: no
    /// submission is pending or the country changed since `request` was made.
    pub fn submission_finished(
        &mut self,
        request: &SubmissionRequest,
        result: &Result<SubmissionOutcome, SubmissionError>,
    ) -> bool {
        let current = self.selection.as_ref().map(|s| s.id());
        if self.submission != SubmissionStatus::Pending
            || current != Some(request.country_id.as_str())
        {
            debug!(
                "Ignoring stale submission answer for country {}",
                request.country_id
            );
            return false;
        }
        if let Err(e) = result {
            warn!("Two-factor submission error: {}", e);
        }
        match failure_message(result) {
            Some(message) => {
                warn!("Two-factor submission failed: {}", message);
                self.submission = SubmissionStatus::Failed(message);
            }
            None => {
                info!("Two-factor challenge requested");
                if self.policy.reset_on_success {
                    self.clear_phone();
                }
                self.submission = SubmissionStatus::Succeeded;
            }
        }
        true
    }

    fn clear_phone(&mut self) {
        self.digits.clear();
        self.display_text.clear();
        self.validation_error = None;
        self.settle_submission();
    }

    // A pending submission stays observable until its answer arrives.
    fn settle_submission(&mut self) {
        if self.submission != SubmissionStatus::Pending {
            self.submission = SubmissionStatus::Idle;
        }
    }
}
