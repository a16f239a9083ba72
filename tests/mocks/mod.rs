use async_trait::async_trait;
use contact_form::error::{DeliveryError, DeliveryResult};
use contact_form::form::{ids, LOADING_LABEL};
use contact_form::{ContactForm, FormSubmission, SharedForm, SubmissionDelivery};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock should do when called.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Behavior {
    Succeed,
    Fail,
    Panic,
}

/// Mock delivery that records every call and the button state seen mid-flight.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDelivery {
    behavior: Behavior,
    delay: Duration,
    form: Option<SharedForm>,
    calls: Arc<Mutex<Vec<FormSubmission>>>,
    button_during_call: Arc<Mutex<Vec<(bool, String)>>>,
}

#[allow(dead_code)]
impl MockDelivery {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            delay: Duration::from_millis(1500),
            form: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            button_during_call: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Observe the submit button of `form` during each call.
    pub fn watching(mut self, form: SharedForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<FormSubmission> {
        self.calls.lock().unwrap().clone()
    }

    /// `(disabled, label)` of the button as seen inside each call.
    pub fn button_states(&self) -> Vec<(bool, String)> {
        self.button_during_call.lock().unwrap().clone()
    }

    pub fn saw_loading_state(&self) -> bool {
        self.button_states()
            .iter()
            .all(|(disabled, label)| *disabled && label == LOADING_LABEL)
    }
}

#[async_trait]
impl SubmissionDelivery for MockDelivery {
    async fn deliver(&self, submission: &FormSubmission) -> DeliveryResult<()> {
        self.calls.lock().unwrap().push(submission.clone());

        if let Some(form) = &self.form {
            let form = form.lock().unwrap();
            let button = form.submit_button();
            self.button_during_call
                .lock()
                .unwrap()
                .push((button.disabled, button.label.clone()));
        }

        tokio::time::sleep(self.delay).await;

        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(DeliveryError::Http("connection reset".to_string())),
            Behavior::Panic => panic!("delivery blew up"),
        }
    }
}

/// A standard form with every required field filled in.
#[allow(dead_code)]
pub fn filled_form() -> SharedForm {
    let mut form = ContactForm::standard();
    form.set_value(ids::NAME, "  Kari Nordmann ");
    form.set_value(ids::EMAIL, "kari@example.no");
    form.set_value(ids::PHONE, "987 65 432");
    form.set_value(ids::ADDRESS, "Storgata 1");
    form.set_value(ids::JOB_TYPE, "reparasjon");
    form.set_value(ids::DESCRIPTION, "Lekkasje i hydraulikk");
    form.set_checked(ids::SITE_VISIT, true);
    Arc::new(Mutex::new(form))
}
