// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Lifecycle of a single RSVP form
//!
//! A [`FormSession`] starts empty and is edited field by field. Every edit re-runs the
//! validator, errors are only shown for fields the guest already touched, and for all
//! fields after the first submit attempt.
//!
//! Submitting is split into [`FormSession::begin_submit`] and [`FormSession::finish_submit`]
//! so the form can stay interactive while the request is outstanding.
//! [`FormSession::submit`] does both with a [`SubmitParticipant`].
use crate::api::{ApiError, SubmitParticipant};
use std::collections::{BTreeMap, BTreeSet};
use types::rsvp::{field_messages, FormField, RsvpForm, VisibleFields};

const MSG_SUCCESS_ALONE: &str = "Hotovo. Těšíme se na tebe.";
const MSG_SUCCESS_PARTY: &str = "Hotovo. Těšíme se na vás.";
const MSG_FAILURE: &str = "Něco se nepovedlo. Zkus to ještě jednou, nebo nám napiš.";

/// The message shown to the guest after a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The participant was stored, the form has been reset
    Success(&'static str),
    /// Storing failed, the entered values were kept
    Failure(&'static str),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

/// Reasons a submission did not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("The form contains invalid fields")]
    Invalid,
    #[error("A submission is already in progress")]
    Busy,
}

/// A validated form waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    /// The wire form, holding trimmed values of visible fields only
    pub form: RsvpForm,
    alone: bool,
}

#[derive(Debug)]
pub struct FormSession<S> {
    submitter: S,
    form: RsvpForm,
    messages: BTreeMap<FormField, String>,
    touched: BTreeSet<FormField>,
    attempted: bool,
    submitting: bool,
}

impl<S> FormSession<S>
where
    S: SubmitParticipant,
{
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            form: RsvpForm::default(),
            messages: BTreeMap::new(),
            touched: BTreeSet::new(),
            attempted: false,
            submitting: false,
        }
    }

    pub fn form(&self) -> &RsvpForm {
        &self.form
    }

    /// Change the value of `field` and validate the form again
    ///
    /// Values of fields that become hidden are kept, they are not sent.
    pub fn edit<F>(&mut self, field: FormField, edit: F)
    where
        F: FnOnce(&mut RsvpForm),
    {
        edit(&mut self.form);
        let _ = self.touched.insert(field);

        self.validate();
    }

    pub fn visible_fields(&self) -> VisibleFields {
        VisibleFields::of(&self.form)
    }

    /// Error messages to show, keyed by field
    pub fn errors(&self) -> BTreeMap<FormField, &str> {
        self.messages
            .iter()
            .filter(|(field, _)| self.attempted || self.touched.contains(field))
            .map(|(field, message)| (*field, message.as_str()))
            .collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate the form once more and mark it as being submitted
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }

        self.attempted = true;

        let submission = match self.validate() {
            Some(submission) => submission,
            None => return Err(SubmitError::Invalid),
        };

        self.submitting = true;

        Ok(PendingSubmission {
            form: RsvpForm::from(&submission),
            alone: submission.party.is_alone(),
        })
    }

    /// Conclude a submission with the outcome of sending it
    ///
    /// Resets the form on success, keeps it on failure.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<(), ApiError>,
    ) -> Notice {
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.form = RsvpForm::default();
                self.messages.clear();
                self.touched.clear();
                self.attempted = false;

                if pending.alone {
                    Notice::Success(MSG_SUCCESS_ALONE)
                } else {
                    Notice::Success(MSG_SUCCESS_PARTY)
                }
            }
            Err(e) => {
                log::error!("Failed to submit participant, {}", e);

                Notice::Failure(MSG_FAILURE)
            }
        }
    }

    /// Validate and send the form
    pub async fn submit(&mut self) -> Result<Notice, SubmitError> {
        let pending = self.begin_submit()?;

        let outcome = self.submitter.submit_participant(&pending.form).await;

        Ok(self.finish_submit(pending, outcome))
    }

    fn validate(&mut self) -> Option<types::rsvp::ParticipantSubmission> {
        match self.form.to_submission() {
            Ok(submission) => {
                self.messages.clear();
                Some(submission)
            }
            Err(errors) => {
                self.messages = field_messages(&errors);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;
    use test_util::{assert_eq, complete_form, FAMILY_COUNT};
    use types::rsvp::{Count, HelpWithFood, KindOfFood};

    #[derive(Default)]
    struct FakeController {
        fail: bool,
        received: Mutex<Vec<RsvpForm>>,
    }

    #[async_trait]
    impl SubmitParticipant for FakeController {
        async fn submit_participant(&self, form: &RsvpForm) -> crate::api::Result<()> {
            self.received.lock().unwrap().push(form.clone());

            if self.fail {
                Err(ApiError::NonSuccess(HttpError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    reason: "{}".into(),
                }))
            } else {
                Ok(())
            }
        }
    }

    fn filled_session(controller: FakeController) -> FormSession<FakeController> {
        let mut session = FormSession::new(controller);
        let form = complete_form();

        session.edit(FormField::FirstName, |f| f.first_name = form.first_name);
        session.edit(FormField::SurName, |f| f.sur_name = form.sur_name);
        session.edit(FormField::Email, |f| f.email = form.email);
        session.edit(FormField::Count, |f| f.count = form.count);
        session.edit(FormField::HelpWithFood, |f| {
            f.help_with_food = form.help_with_food
        });
        session.edit(FormField::Arrival, |f| f.arrival = form.arrival);
        session.edit(FormField::Departure, |f| f.departure = form.departure);

        session
    }

    #[test]
    fn errors_follow_touched_fields() {
        let mut session = FormSession::new(FakeController::default());

        assert!(session.errors().is_empty());

        session.edit(FormField::FirstName, |f| f.first_name = Some("  ".into()));

        assert_eq!(
            session.errors(),
            BTreeMap::from([(FormField::FirstName, "Vyplň své jméno.")])
        );

        session.edit(FormField::FirstName, |f| f.first_name = Some("Jana".into()));

        assert!(session.errors().is_empty());
    }

    #[test]
    fn conditional_fields_appear_and_keep_values() {
        let mut session = FormSession::new(FakeController::default());

        session.edit(FormField::Count, |f| f.count = Some(Count::More));
        assert!(session.visible_fields().family_count);
        assert_eq!(
            session.errors().get(&FormField::FamilyCount),
            None,
            "untouched fields show no error"
        );

        session.edit(FormField::FamilyCount, |f| f.family_count = Some(3_u32.into()));
        session.edit(FormField::Count, |f| f.count = Some(Count::Two));

        assert!(!session.visible_fields().family_count);
        assert_eq!(session.form().family_count, Some(3_u32.into()));
        assert!(!session.errors().contains_key(&FormField::FamilyCount));
    }

    #[test]
    fn invalid_submit_shows_all_errors() {
        let mut session = FormSession::new(FakeController::default());

        assert_eq!(session.begin_submit(), Err(SubmitError::Invalid));
        assert!(!session.is_submitting());

        let errors = session.errors();
        assert_eq!(errors[&FormField::FirstName], "Vyplň své jméno.");
        assert_eq!(errors[&FormField::Departure], "Vyber kdy odjedeš.");
        assert!(!errors.contains_key(&FormField::FamilyCount));
    }

    #[test]
    fn outstanding_submission_blocks_another() {
        let mut session = filled_session(FakeController::default());

        let pending = session.begin_submit().unwrap();

        assert!(session.is_submitting());
        assert_eq!(session.begin_submit(), Err(SubmitError::Busy));

        let notice = session.finish_submit(pending, Ok(()));

        assert_eq!(notice, Notice::Success("Hotovo. Těšíme se na tebe."));
        assert!(!session.is_submitting());
    }

    #[tokio::test]
    async fn success_resets_the_form() {
        let mut session = filled_session(FakeController::default());

        session.edit(FormField::Count, |f| f.count = Some(Count::More));
        session.edit(FormField::FamilyCount, |f| {
            f.family_count = Some(FAMILY_COUNT.into())
        });

        let notice = session.submit().await.unwrap();

        assert_eq!(notice.message(), "Hotovo. Těšíme se na vás.");
        assert_eq!(session.form(), &RsvpForm::default());
        assert!(session.errors().is_empty());
        assert_eq!(session.submitter.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failure_keeps_the_values() {
        let mut session = filled_session(FakeController {
            fail: true,
            ..Default::default()
        });
        let before = session.form().clone();

        let notice = session.submit().await.unwrap();

        assert_eq!(
            notice,
            Notice::Failure("Něco se nepovedlo. Zkus to ještě jednou, nebo nám napiš.")
        );
        assert_eq!(session.form(), &before);
        assert!(!session.is_submitting());
        assert_eq!(session.submitter.received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn hidden_values_are_not_sent() {
        let mut session = filled_session(FakeController::default());

        session.edit(FormField::HelpWithFood, |f| {
            f.help_with_food = Some(HelpWithFood::Yes)
        });
        session.edit(FormField::KindOfFood, |f| {
            f.kind_of_food = Some(vec![KindOfFood::Other])
        });
        session.edit(FormField::KindOfFoodSpec, |f| {
            f.kind_of_food_spec = Some(" Guláš ".into())
        });
        session.edit(FormField::HelpWithFood, |f| {
            f.help_with_food = Some(HelpWithFood::No)
        });

        let _ = session.submit().await.unwrap();

        let received = session.submitter.received.lock().unwrap();
        assert_eq!(received[0].help_with_food, Some(HelpWithFood::No));
        assert_eq!(received[0].kind_of_food, None);
        assert_eq!(received[0].kind_of_food_spec, None);
    }
}
