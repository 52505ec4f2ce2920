/// User-feedback severity, mirroring the success/error toast split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

/// Receives user-facing outcome messages. The submission session calls
/// this; it never formats output itself.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NotifyKind, message: &str);
}

/// Terminal notifier used by the CLI.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success => eprintln!("  ok  {message}"),
            NotifyKind::Error => eprintln!("  FAIL {message}"),
        }
    }
}
