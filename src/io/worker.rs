use crate::error::BackendError;
use crate::io::backend::{Answer, Backend};
use crate::model::{Collection, CollectionId};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

pub enum IoCommand {
    LoadCollections,
    Ask {
        collection: CollectionId,
        prompt: String,
        top_k: usize,
        /// Chat session the prompt belongs to, echoed back with the answer
        session: u64,
    },
}

#[derive(Debug)]
pub enum IoResult {
    CollectionsLoaded(Result<Vec<Collection>, BackendError>),
    Answered {
        collection: CollectionId,
        session: u64,
        result: Result<Answer, BackendError>,
    },
}

pub fn spawn_worker(
    ctx: eframe::egui::Context,
    backend: Box<dyn Backend>,
) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                IoCommand::LoadCollections => {
                    debug!("Loading collections");
                    IoResult::CollectionsLoaded(backend.list_collections())
                }
                IoCommand::Ask {
                    collection,
                    prompt,
                    top_k,
                    session,
                } => {
                    debug!(collection = %collection, top_k, session, "Asking backend");
                    let result = backend.ask(&collection, &prompt, top_k);
                    IoResult::Answered {
                        collection,
                        session,
                        result,
                    }
                }
            };
            if res_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        warn!("I/O worker stopped");
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::backend::OfflineBackend;
    use std::time::Duration;

    #[test]
    fn test_worker_round_trip() {
        let backend = OfflineBackend::new(vec![Collection::new("1", "Manuals")]);
        let (tx, rx) = spawn_worker(eframe::egui::Context::default(), Box::new(backend));

        tx.send(IoCommand::LoadCollections).expect("send failed");
        match rx.recv_timeout(Duration::from_secs(5)).expect("no result") {
            IoResult::CollectionsLoaded(Ok(collections)) => assert_eq!(collections.len(), 1),
            other => panic!("unexpected result: {:?}", other),
        }

        tx.send(IoCommand::Ask {
            collection: CollectionId::new("nope"),
            prompt: "hi".to_string(),
            top_k: 3,
            session: 7,
        })
        .expect("send failed");
        match rx.recv_timeout(Duration::from_secs(5)).expect("no result") {
            IoResult::Answered {
                collection,
                session,
                result,
            } => {
                assert_eq!(collection, CollectionId::new("nope"));
                assert_eq!(session, 7);
                assert!(matches!(result, Err(BackendError::CollectionNotFound(_))));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
