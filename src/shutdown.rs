use tokio::sync::oneshot;

/// Write-once termination flag held by the input-dispatch side.
pub struct Shutdown {
    sender: Option<oneshot::Sender<()>>,
}

/// The other half: awaited by the task that tears the terminal down.
pub struct ShutdownWaiter {
    receiver: oneshot::Receiver<()>,
}

impl Shutdown {
    pub fn new() -> (Self, ShutdownWaiter) {
        let (sender, receiver) = oneshot::channel();
        (
            Self {
                sender: Some(sender),
            },
            ShutdownWaiter { receiver },
        )
    }

    /// Raise the signal. Later calls do nothing.
    pub fn trigger(&mut self) {
        if let Some(sender) = self.sender.take() {
            log::debug!("termination requested");
            // The waiter may already be gone during teardown
            let _ = sender.send(());
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.sender.is_none()
    }
}

impl ShutdownWaiter {
    /// Resolves once the signal is raised or the dispatch side is dropped.
    pub async fn wait(self) {
        let _ = self.receiver.await;
    }
}
