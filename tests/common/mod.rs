//! Shared test utilities: summarizer stubs, clipboard spy, app factory.

#![allow(dead_code, unused_imports)]

pub mod mock_llm;

use async_trait::async_trait;
use parking_lot::Mutex;
use pastesum::clipboard::ClipboardWriter;
use pastesum::prompt::SummaryLength;
use pastesum::summarizer::{SummarizeError, Summarizer};
use pastesum::ui::app::{App, AppSettings};
use pastesum::ui::events::AppEvent;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

/// What a [`StubSummarizer`] answers with.
#[derive(Debug, Clone)]
pub enum StubReply {
    Summary(String),
    Timeout,
    ApiError(u16, String),
    Panic,
}

/// Scripted summarizer that counts calls and can be held open.
pub struct StubSummarizer {
    reply: StubReply,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, SummaryLength)>>,
    gate: Option<Notify>,
}

impl StubSummarizer {
    pub fn new(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            gate: None,
        })
    }

    /// Calls block until [`StubSummarizer::release`].
    pub fn gated(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            gate: Some(Notify::new()),
        })
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, SummaryLength)> {
        self.seen.lock().clone()
    }

    pub async fn wait_for_calls(&self, expected: usize) {
        for _ in 0..400 {
            if self.calls() >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("expected {} summarizer calls, saw {}", expected, self.calls());
    }
}

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push((text.to_string(), length));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            StubReply::Summary(text) => Ok(text.clone()),
            StubReply::Timeout => Err(SummarizeError::Timeout),
            StubReply::ApiError(status, message) => Err(SummarizeError::ApiError {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Panic => panic!("stub summarizer exploded"),
        }
    }
}

/// Clipboard that records writes, or fails every write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl ClipboardWriter for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("clipboard locked".to_string());
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

pub fn test_settings() -> AppSettings {
    AppSettings {
        default_length: SummaryLength::Medium,
        copy_feedback: Duration::from_secs(2),
        model_label: "Anthropic · test-model".to_string(),
        credential_configured: true,
    }
}

/// Build an app on the current tokio runtime.
pub fn make_app(summarizer: Arc<dyn Summarizer>) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let app = App::new(
        test_settings(),
        summarizer,
        tokio::runtime::Handle::current(),
        tx,
    );
    (app, rx)
}

/// Block until the in-flight summarization reports back.
pub fn next_summary(rx: &Receiver<AppEvent>) -> Result<String, String> {
    loop {
        match rx.recv_timeout(Duration::from_secs(5)) {
            Ok(AppEvent::SummaryReady(result)) => return result,
            Ok(_) => continue,
            Err(err) => panic!("no summary event: {}", err),
        }
    }
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
