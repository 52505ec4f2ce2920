use std::sync::atomic::{AtomicBool, Ordering};

use charforge_core::{normalize, Draft, ValidationError};
use tracing::debug;

use crate::notify::{Notifier, NotifyKind};
use crate::transport::{SubmitReceipt, Transport, TransportError};

/// Why a save did not reach the server, or why the server refused it.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("a save is already in flight")]
    SaveInFlight,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// One form instance's submission state. At most one save is in flight;
/// a second attempt while one is pending is rejected, not queued. A save
/// runs to completion — there is no cancellation or timeout here.
#[derive(Default)]
pub struct SubmitSession {
    saving: AtomicBool,
}

impl SubmitSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// Normalize the draft and submit it, reporting the outcome through
    /// the notifier either way. The saving flag is taken with a single
    /// check-then-set and released once the attempt completes.
    pub async fn save(
        &self,
        draft: &Draft,
        transport: &dyn Transport,
        notifier: &dyn Notifier,
    ) -> Result<SubmitReceipt, SaveError> {
        if self
            .saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SaveError::SaveInFlight);
        }

        let result = self.save_inner(draft, transport).await;
        self.saving.store(false, Ordering::Release);

        match &result {
            Ok(_) => notifier.notify(NotifyKind::Success, "agent configuration saved successfully"),
            Err(e) => notifier.notify(NotifyKind::Error, &e.to_string()),
        }
        result
    }

    async fn save_inner(
        &self,
        draft: &Draft,
        transport: &dyn Transport,
    ) -> Result<SubmitReceipt, SaveError> {
        let payload = normalize(draft)?;
        debug!(agent = %payload.name, "draft normalized, dispatching");
        Ok(transport.submit(&payload).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use charforge_core::draft::StyleDraft;
    use charforge_core::types::{ClientKind, ModelProvider};
    use charforge_core::Payload;
    use std::sync::atomic::AtomicUsize;
    use std::sync::{Arc, Mutex};

    fn valid_draft() -> Draft {
        Draft {
            name: "Ada".to_string(),
            bio: "Analytical engine operator".to_string(),
            model_provider: Some(ModelProvider::Anthropic),
            clients: vec![ClientKind::Discord],
            style: StyleDraft {
                all: "be precise".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[derive(Default)]
    struct Recorder {
        messages: Mutex<Vec<(NotifyKind, String)>>,
    }

    impl Notifier for Recorder {
        fn notify(&self, kind: NotifyKind, message: &str) {
            self.messages.lock().unwrap().push((kind, message.to_string()));
        }
    }

    struct FakeTransport {
        calls: AtomicUsize,
        fail: bool,
        gate: Option<Arc<tokio::sync::Notify>>,
    }

    impl FakeTransport {
        fn ok() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: false,
                gate: None,
            }
        }

        fn rejecting() -> Self {
            Self {
                fail: true,
                ..Self::ok()
            }
        }

        fn gated(gate: Arc<tokio::sync::Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::ok()
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn submit(&self, _payload: &Payload) -> Result<SubmitReceipt, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail {
                Err(TransportError::Rejected {
                    status: 400,
                    detail: Some("Agent already exists".to_string()),
                })
            } else {
                Ok(SubmitReceipt {
                    status: 200,
                    message: None,
                })
            }
        }
    }

    #[tokio::test]
    async fn successful_save_notifies_and_clears_flag() {
        let session = SubmitSession::new();
        let transport = FakeTransport::ok();
        let notifier = Recorder::default();

        let receipt = session
            .save(&valid_draft(), &transport, &notifier)
            .await
            .unwrap();
        assert_eq!(receipt.status, 200);
        assert!(!session.is_saving());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, NotifyKind::Success);
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_transport() {
        let session = SubmitSession::new();
        let transport = FakeTransport::ok();
        let notifier = Recorder::default();

        let err = session
            .save(&Draft::default(), &transport, &notifier)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SaveError::Validation(ValidationError::MissingRequiredField("name"))
        ));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert!(!session.is_saving());

        let messages = notifier.messages.lock().unwrap();
        assert_eq!(messages[0].0, NotifyKind::Error);
        assert_eq!(messages[0].1, "name is required");
    }

    #[tokio::test]
    async fn rejection_surfaces_server_detail_and_allows_retry() {
        let session = SubmitSession::new();
        let transport = FakeTransport::rejecting();
        let notifier = Recorder::default();

        let err = session
            .save(&valid_draft(), &transport, &notifier)
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::Transport(_)));
        assert!(!session.is_saving());

        // the flag cleared, so a fresh attempt goes through
        let err = session
            .save(&valid_draft(), &transport, &notifier)
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::Transport(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);

        let messages = notifier.messages.lock().unwrap();
        assert!(messages[0].1.contains("Agent already exists"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn overlapping_save_is_rejected() {
        let session = Arc::new(SubmitSession::new());
        let gate = Arc::new(tokio::sync::Notify::new());
        let transport = Arc::new(FakeTransport::gated(gate.clone()));
        let notifier = Arc::new(Recorder::default());

        let first = {
            let session = session.clone();
            let transport = transport.clone();
            let notifier = notifier.clone();
            tokio::spawn(async move {
                session
                    .save(&valid_draft(), transport.as_ref(), notifier.as_ref())
                    .await
            })
        };

        // wait for the first save to hit the transport and park
        while transport.calls.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        assert!(session.is_saving());

        let err = session
            .save(&valid_draft(), transport.as_ref(), notifier.as_ref())
            .await
            .unwrap_err();
        assert!(matches!(err, SaveError::SaveInFlight));

        gate.notify_one();
        let receipt = first.await.unwrap().unwrap();
        assert_eq!(receipt.status, 200);
        assert!(!session.is_saving());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}
