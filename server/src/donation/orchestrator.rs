use crate::donation::{
    id::DonationId,
    payload::PayloadEncoder,
    qr::{QrImage, QrRenderer, RenderError},
    request::DonationRequest,
};
use charity_storage::{
    models::donation::{DonationStatus, NewDonationRow},
    stores::donation::DonationStore,
};
use chrono::Utc;
use log::{debug, error, warn};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    IdGenerated,
    Persisting,
    PersistSkipped,
    PayloadComputed,
    PersistUpdated,
    UpdateSkipped,
    Rendered,
    Failed,
}

/// Whether a submission ended up in the donor's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The donor is anonymous.
    NotSaved,
    SaveFailed,
}

impl SaveOutcome {
    /// Message shown to the donor once the QR code is ready.
    pub fn notice(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => {
                "Donation recorded! Your donation has been saved to your history."
            }
            SaveOutcome::NotSaved => {
                "Your donation QR code is ready. Sign in to save donation history."
            }
            SaveOutcome::SaveFailed => {
                "Your donation QR code is ready to use, but the donation could not be saved to your history."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DownloadableQr {
    pub file_name: String,
    pub image: QrImage,
}

/// A submission that reached the rendered state.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub donation_id: DonationId,
    pub payload: String,
    pub qr: DownloadableQr,
    pub save: SaveOutcome,
    /// Whether the stored donation carries `payload`.
    pub payload_stored: bool,
    pub states: Vec<SubmissionState>,
}

#[derive(thiserror::Error, Debug)]
#[error("failed to render QR code for donation {donation_id}: {source}")]
pub struct SubmissionError {
    pub donation_id: DonationId,
    pub save: SaveOutcome,
    pub states: Vec<SubmissionState>,
    #[source]
    pub source: RenderError,
}

struct Transitions {
    states: Vec<SubmissionState>,
}

impl Transitions {
    fn new() -> Self {
        Self {
            states: vec![SubmissionState::Idle],
        }
    }

    fn enter(&mut self, state: SubmissionState) {
        debug!("Submission entering {:?}", state);
        self.states.push(state);
    }
}

/// Runs a donation from a validated request to a rendered QR code, saving it
/// along the way for signed-in donors.
pub struct SubmissionOrchestrator {
    encoder: PayloadEncoder,
    renderer: Arc<dyn QrRenderer>,
}

impl SubmissionOrchestrator {
    pub fn new(encoder: PayloadEncoder, renderer: Arc<dyn QrRenderer>) -> Self {
        Self { encoder, renderer }
    }

    /// Submits a donation. Store failures are logged and the QR code is still
    /// rendered; only a rendering failure fails the submission.
    pub async fn submit<S>(
        &self,
        store: &S,
        owner_id: Option<&str>,
        request: &DonationRequest,
    ) -> Result<Submission, SubmissionError>
    where
        S: DonationStore + ?Sized,
    {
        let mut transitions = Transitions::new();

        let provisional_id = DonationId::provisional();
        transitions.enter(SubmissionState::IdGenerated);

        let (donation_id, save) = match owner_id {
            None => {
                transitions.enter(SubmissionState::PersistSkipped);
                (provisional_id, SaveOutcome::NotSaved)
            }
            Some(owner_id) => {
                transitions.enter(SubmissionState::Persisting);
                match store.add_donation(new_donation_row(owner_id, request)).await {
                    Ok(row) => (DonationId::Persisted(row.donation_id), SaveOutcome::Saved),
                    Err(e) => {
                        error!("Error saving donation {}: {:?}", provisional_id, e);
                        (provisional_id, SaveOutcome::SaveFailed)
                    }
                }
            }
        };

        let payload = self.encoder.encode(&donation_id, request);
        transitions.enter(SubmissionState::PayloadComputed);

        let payload_stored = match donation_id.persisted_id() {
            Some(persisted_id) => {
                match store
                    .update_donation_payload(persisted_id, payload.clone())
                    .await
                {
                    Ok(_) => {
                        transitions.enter(SubmissionState::PersistUpdated);
                        true
                    }
                    Err(e) => {
                        warn!("Error storing payload of donation {}: {:?}", persisted_id, e);
                        transitions.enter(SubmissionState::UpdateSkipped);
                        false
                    }
                }
            }
            None => {
                transitions.enter(SubmissionState::UpdateSkipped);
                false
            }
        };

        match self.renderer.render(&payload) {
            Ok(image) => {
                transitions.enter(SubmissionState::Rendered);
                Ok(Submission {
                    qr: DownloadableQr {
                        file_name: donation_id.download_file_name(),
                        image,
                    },
                    donation_id,
                    payload,
                    save,
                    payload_stored,
                    states: transitions.states,
                })
            }
            Err(source) => {
                error!("Error generating QR code for donation {}: {}", donation_id, source);
                transitions.enter(SubmissionState::Failed);
                Err(SubmissionError {
                    donation_id,
                    save,
                    states: transitions.states,
                    source,
                })
            }
        }
    }
}

fn new_donation_row(owner_id: &str, request: &DonationRequest) -> NewDonationRow {
    let now = Utc::now();
    NewDonationRow {
        create_time: now,
        update_time: now,
        owner_id: owner_id.to_string(),
        category: request.category.clone(),
        amount: request.numeric_amount(),
        donation_kind: request.kind,
        description: request.description(),
        qr_payload: String::new(),
        status: DonationStatus::Pending,
    }
}
