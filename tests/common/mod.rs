//! Test utilities for the Storybook tools test suite

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kodegen_tools_storybook::browser::{NavigationWait, PageSession, SessionProvider};
use kodegen_tools_storybook::dom::{DomHost, Script, ScriptKind};
use kodegen_tools_storybook::{Result, ScrapeTimeouts, ServerConfig, StorybookError};
use mockito::{Mock, Server};
use serde_json::Value;

type Answer = std::result::Result<Value, String>;

/// Short bounds so timeouts resolve quickly
#[allow(dead_code)]
pub fn fast_timeouts() -> ScrapeTimeouts {
    ScrapeTimeouts::uniform(Duration::from_millis(150), Duration::from_millis(10))
}

/// Configuration pointing at `url` with fast timeouts
#[allow(dead_code)]
pub fn test_config(url: &str) -> ServerConfig {
    ServerConfig::builder()
        .storybook_url(url)
        .timeouts(fast_timeouts())
        .build()
        .expect("Failed to create test config")
}

/// Answers scripts by kind with canned JSON
///
/// Each kind holds a queue: answers are consumed in order and the last one
/// repeats. Kinds without answers fail evaluation.
#[derive(Default)]
pub struct ScriptedHost {
    answers: Mutex<HashMap<ScriptKind, VecDeque<Answer>>>,
    seen: Mutex<Vec<(ScriptKind, String)>>,
}

#[allow(dead_code)]
impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, kind: ScriptKind, value: Value) -> Self {
        self.push(kind, Ok(value))
    }

    pub fn fail(self, kind: ScriptKind, message: &str) -> Self {
        self.push(kind, Err(message.to_string()))
    }

    fn push(self, kind: ScriptKind, answer: Answer) -> Self {
        self.answers
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(answer);
        self
    }

    /// Number of evaluations of `kind`
    pub fn calls(&self, kind: ScriptKind) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Source of the most recent evaluation of `kind`
    pub fn last_source(&self, kind: ScriptKind) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(k, _)| *k == kind)
            .map(|(_, source)| source.clone())
    }

    fn snapshot(&self) -> HashMap<ScriptKind, VecDeque<Answer>> {
        self.answers.lock().unwrap().clone()
    }
}

impl DomHost for ScriptedHost {
    async fn evaluate(&self, script: &Script) -> Result<Value> {
        self.seen
            .lock()
            .unwrap()
            .push((script.kind(), script.source().to_string()));

        let mut answers = self.answers.lock().unwrap();
        let queue = answers.get_mut(&script.kind()).ok_or_else(|| {
            StorybookError::Evaluation(format!("no scripted answer for {:?}", script.kind()))
        })?;
        let answer = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };

        match answer {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(StorybookError::Evaluation(message)),
            None => Err(StorybookError::Evaluation("empty answer queue".to_string())),
        }
    }
}

/// Session handed out by [`FakeProvider`]
pub struct ScriptedSession {
    host: ScriptedHost,
    closed: Arc<AtomicUsize>,
}

impl DomHost for ScriptedSession {
    async fn evaluate(&self, script: &Script) -> Result<Value> {
        self.host.evaluate(script).await
    }
}

impl PageSession for ScriptedSession {
    async fn close(self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Session provider that counts acquisitions and releases
pub struct FakeProvider {
    template: HashMap<ScriptKind, VecDeque<Answer>>,
    fail_open: bool,
    pub opened: Arc<AtomicUsize>,
    pub closed: Arc<AtomicUsize>,
    pub waits: Arc<Mutex<Vec<(String, NavigationWait)>>>,
}

#[allow(dead_code)]
impl FakeProvider {
    /// Every opened session answers like `host`
    pub fn new(host: ScriptedHost) -> Self {
        Self {
            template: host.snapshot(),
            fail_open: false,
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
            waits: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every open attempt fails as if Chrome could not start
    pub fn failing() -> Self {
        Self {
            fail_open: true,
            ..Self::new(ScriptedHost::new())
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn last_wait(&self) -> Option<NavigationWait> {
        self.waits.lock().unwrap().last().map(|(_, wait)| *wait)
    }
}

impl SessionProvider for FakeProvider {
    type Session = ScriptedSession;

    async fn open(&self, url: &str, wait: NavigationWait) -> Result<ScriptedSession> {
        self.waits.lock().unwrap().push((url.to_string(), wait));
        if self.fail_open {
            return Err(StorybookError::Browser("Failed to launch browser".to_string()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(ScriptedSession {
            host: ScriptedHost {
                answers: Mutex::new(self.template.clone()),
                seen: Mutex::new(Vec::new()),
            },
            closed: self.closed.clone(),
        })
    }
}

/// Creates a mock endpoint that returns a JSON document
#[allow(dead_code)]
pub fn create_json_mock(server: &mut Server, path: &str, body: &Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// Creates a mock endpoint that returns an error
#[allow(dead_code)]
pub fn create_error_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_body("Error")
        .create()
}

/// Creates a mock endpoint that returns HTML content
#[allow(dead_code)]
pub fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create()
}
