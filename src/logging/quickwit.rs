use crate::logging::consts::QUICKWIT_CHANNEL_CAPACITY;
use chrono::Utc;
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::field::{Field, Visit};
use tracing_core::{Event, Subscriber};
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

type Document = Map<String, Value>;

pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: &'static str,
    marker_to_index: HashMap<&'static str, &'static str>,
    batch_size: usize,
    flush_interval: Duration,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: "",
            marker_to_index: HashMap::new(),
            batch_size: 1,
            flush_interval: Duration::from_secs(1),
        }
    }

    pub fn marker_field(mut self, field: &'static str) -> Self {
        self.marker_field = field;
        self
    }

    pub fn map_marker_to_index(mut self, marker: &'static str, index_id: &'static str) -> Self {
        self.marker_to_index.insert(marker, index_id);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_flush_interval(mut self, flush_interval: Duration) -> Self {
        self.flush_interval = flush_interval;
        self
    }

    /// Spawns the shipping task, so this must be called from within a tokio runtime.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_CHANNEL_CAPACITY);
        let shipper = QuickwitShipper {
            client: Client::new(),
            quickwit_url: self.quickwit_url,
            batch_size: self.batch_size,
            batches: HashMap::new(),
        };
        tokio::spawn(shipper.run(receiver, self.flush_interval));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

/// Forwards events carrying a known marker value to Quickwit, everything else is ignored.
pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<IndexedDocument>,
    marker_field: &'static str,
    marker_to_index: HashMap<&'static str, &'static str>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, event: &Event<'_>) -> Option<&'static str> {
        let mut visitor = MarkerVisitor {
            marker_field: self.marker_field,
            marker: None,
        };
        event.record(&mut visitor);
        visitor
            .marker
            .and_then(|marker| self.marker_to_index.get(marker.as_str()).copied())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        let Some(index_id) = self.index_for(event) else {
            return;
        };
        let mut visitor = DocumentVisitor::default();
        event.record(&mut visitor);
        visitor
            .document
            .insert(String::from("timestamp"), Utc::now().timestamp().into());
        // Logging must never block a request, a full channel drops the event.
        let _ = self.sender.try_send(IndexedDocument {
            index_id,
            document: visitor.document,
        });
    }
}

struct IndexedDocument {
    index_id: &'static str,
    document: Document,
}

struct QuickwitShipper {
    client: Client,
    quickwit_url: Url,
    batch_size: usize,
    batches: HashMap<&'static str, Vec<Document>>,
}

impl QuickwitShipper {
    async fn run(mut self, mut receiver: mpsc::Receiver<IndexedDocument>, flush_interval: Duration) {
        let mut ticker = tokio::time::interval(flush_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                received = receiver.recv() => match received {
                    Some(IndexedDocument { index_id, document }) => {
                        let batch = self.batches.entry(index_id).or_default();
                        batch.push(document);
                        if batch.len() >= self.batch_size {
                            self.flush(index_id).await;
                        }
                    }
                    None => break,
                },
                _ = ticker.tick() => self.flush_all().await,
            }
        }
        self.flush_all().await;
    }

    async fn flush_all(&mut self) {
        let index_ids: Vec<&'static str> = self.batches.keys().copied().collect();
        for index_id in index_ids {
            self.flush(index_id).await;
        }
    }

    async fn flush(&mut self, index_id: &'static str) {
        let Some(batch) = self.batches.get_mut(index_id) else {
            return;
        };
        if batch.is_empty() {
            return;
        }
        let body = to_ndjson(batch);
        batch.clear();
        let endpoint = match self
            .quickwit_url
            .join(&format!("api/v1/{index_id}/ingest"))
        {
            Ok(endpoint) => endpoint,
            Err(err) => {
                eprintln!("[quickwit]: bad ingest URL for index `{index_id}`: {err}");
                return;
            }
        };
        // Reporting through `tracing` here would feed the failure back into this layer.
        let response = self.client.post(endpoint).body(body).send().await;
        if let Err(err) = response.and_then(|response| response.error_for_status()) {
            eprintln!("[quickwit]: failed to ingest logs into `{index_id}`: {err}");
        }
    }
}

fn to_ndjson(documents: &[Document]) -> Vec<u8> {
    let mut body = Vec::new();
    for document in documents {
        if serde_json::to_writer(&mut body, document).is_ok() {
            body.push(b'\n');
        }
    }
    body
}

struct MarkerVisitor {
    marker_field: &'static str,
    marker: Option<String>,
}

impl Visit for MarkerVisitor {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker = Some(value.to_string());
        }
    }
}

#[derive(Default)]
struct DocumentVisitor {
    document: Document,
}

impl DocumentVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.document.insert(field.name().to_string(), value);
    }
}

impl Visit for DocumentVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        // Quickwit has no 128-bit integers.
        self.insert(field, u64::try_from(value).unwrap_or(u64::MAX).into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.insert(field, format!("{value:?}").into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn documents_are_newline_delimited() {
        let documents = vec![
            json!({"task": "http_request", "status": 200}),
            json!({"task": "location_saved"}),
        ]
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(document) => Some(document),
            _ => None,
        })
        .collect::<Vec<_>>();

        let body = String::from_utf8(to_ndjson(&documents)).unwrap();

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(body.ends_with('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(lines[1]).unwrap(),
            json!({"task": "location_saved"})
        );
    }
}
