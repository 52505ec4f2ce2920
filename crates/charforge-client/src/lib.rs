#![forbid(unsafe_code)]

pub mod notify;
pub mod session;
pub mod transport;

pub use notify::{Notifier, NotifyKind, StderrNotifier};
pub use session::{SaveError, SubmitSession};
pub use transport::{AgentApi, SubmitReceipt, Transport, TransportError};
