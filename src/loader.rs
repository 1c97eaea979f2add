use crate::csv::load_csv;
use crate::logger;
use crate::models::{LoadEvent, LoadRequest};
use crossbeam_channel::{Receiver, Sender};
use std::io;
use std::thread;

pub fn spawn_loader(
    event_tx: Sender<LoadEvent>,
    request_rx: Receiver<LoadRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("word-quiz::loader".to_string())
        .spawn(move || {
            while let Ok(LoadRequest::Load { name, path }) = request_rx.recv() {
                logger::log(&format!("Loader reading {} from {}", name, path.display()));
                let event = match load_csv(&path) {
                    Ok(words) => LoadEvent::Loaded { name, words },
                    Err(error) => LoadEvent::Failed { name, error },
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
            logger::log("Loader channel disconnected, exiting");
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_loader_reads_file_and_reports_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nouns.csv");
        std::fs::write(&path, "gato,cat\nperro,dog\n").unwrap();

        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let handle = spawn_loader(event_tx, request_rx).unwrap();

        request_tx
            .send(LoadRequest::Load {
                name: "nouns".to_string(),
                path,
            })
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadEvent::Loaded { name, words } => {
                assert_eq!(name, "nouns");
                assert_eq!(words.len(), 2);
            }
            other => panic!("unexpected event {:?}", other),
        }

        drop(request_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_loader_reports_failure() {
        let dir = tempfile::tempdir().unwrap();

        let (request_tx, request_rx) = crossbeam_channel::unbounded();
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let handle = spawn_loader(event_tx, request_rx).unwrap();

        request_tx
            .send(LoadRequest::Load {
                name: "verbs".to_string(),
                path: dir.path().join("verbs.csv"),
            })
            .unwrap();

        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            LoadEvent::Failed { name, .. } => assert_eq!(name, "verbs"),
            other => panic!("unexpected event {:?}", other),
        }

        drop(request_tx);
        handle.join().unwrap();
    }
}
