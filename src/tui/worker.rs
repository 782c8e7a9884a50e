//! Runs backend requests off the UI thread
//!
//! Each request gets its own short-lived thread; the completion is posted to
//! the event channel tagged with the request id.

use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};
use uuid::Uuid;

use super::event::Event;
use crate::services::{ApiClient, ApiCompletion, ApiRequest, Dispatch};

pub struct ThreadDispatcher {
    client: ApiClient,
    sender: mpsc::Sender<Event>,
}

impl ThreadDispatcher {
    pub fn new(client: ApiClient, sender: mpsc::Sender<Event>) -> Self {
        Self { client, sender }
    }
}

impl Dispatch for ThreadDispatcher {
    fn dispatch(&self, request: ApiRequest) -> Uuid {
        let id = Uuid::new_v4();
        let client = self.client.clone();
        let sender = self.sender.clone();

        thread::spawn(move || {
            let result = client.execute(&request);
            debug!(%id, request = request.name(), ok = result.is_ok(), "request finished");
            if sender.send(Event::Api(ApiCompletion { id, result })).is_err() {
                warn!(%id, "event loop gone, dropping completion");
            }
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::Settings;

    #[test]
    fn test_completion_carries_request_id() {
        let mut settings = Settings::default().with_api_base_url(Some("http://127.0.0.1:9".into()));
        settings.request_timeout_secs = 1;
        let client = ApiClient::new(&settings).unwrap();
        let (sender, receiver) = mpsc::channel();

        let dispatcher = ThreadDispatcher::new(client, sender);
        let id = dispatcher.dispatch(ApiRequest::FetchUser);

        match receiver.recv_timeout(Duration::from_secs(10)).unwrap() {
            Event::Api(completion) => {
                assert_eq!(completion.id, id);
                assert!(completion.result.unwrap_err().is_remote());
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
