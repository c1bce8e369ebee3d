use std::sync::{mpsc, Arc};
use std::thread;

use crate::fetch::{CategoryQuery, FetchSettings, HeadlineSource};
use crate::{EngineEvent, FetchError, HeadlinePage, RequestId, SourceChain};

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        category: CategoryQuery,
        page: Option<String>,
    },
}

/// Handle to the IO thread. Commands go in over one channel, completion
/// events come back over another. Dropping the handle closes the command
/// channel, which ends the thread and aborts any request still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let source = Arc::new(SourceChain::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request(
        &self,
        request_id: RequestId,
        category: CategoryQuery,
        page: Option<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch {
            request_id,
            category,
            page,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn HeadlineSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch {
            request_id,
            category,
            page,
        } => {
            let result: Result<HeadlinePage, FetchError> =
                source.fetch_page(&category, page.as_deref()).await;
            let _ = event_tx.send(EngineEvent::PageCompleted { request_id, result });
        }
    }
}
