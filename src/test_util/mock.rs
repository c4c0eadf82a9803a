//! In-memory doubles for the status collaborators.

use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
};

use serenity::async_trait;

use crate::{
    data::{
        discord::StatusChannel,
        server_query::{QueryInfo, QueryPlayer, ServerQuery},
    },
    error::{channel::ChannelError, AppError},
    model::rendered::RenderedStatus,
};

/// Query double that either answers with a fixed response or fails every request.
pub struct MockServerQuery {
    response: Option<(QueryInfo, Vec<QueryPlayer>)>,
    pub calls: AtomicUsize,
}

impl MockServerQuery {
    pub fn responding(info: QueryInfo, players: Vec<QueryPlayer>) -> Self {
        Self {
            response: Some((info, players)),
            calls: AtomicUsize::new(0),
        }
    }

    /// A server that never answers.
    pub fn unreachable() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ServerQuery for MockServerQuery {
    async fn info(&self, host: &str, port: u16) -> Result<QueryInfo, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some((info, _)) => Ok(info.clone()),
            None => Err(AppError::QueryErr(format!(
                "no response from {}:{}",
                host, port
            ))),
        }
    }

    async fn players(&self, host: &str, port: u16) -> Result<Vec<QueryPlayer>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Some((_, players)) => Ok(players.clone()),
            None => Err(AppError::QueryErr(format!(
                "no response from {}:{}",
                host, port
            ))),
        }
    }
}

/// A call made against `MockStatusChannel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCall {
    CheckChannel,
    Send(u64),
    Fetch(u64),
    Edit(u64),
}

/// Channel double that records every call.
///
/// Sent messages receive increasing ids starting at 1000. Messages can be marked
/// deleted to simulate not-found responses, and the channel can be switched into a
/// failing mode that returns a transient error from every call.
pub struct MockStatusChannel {
    next_id: AtomicU64,
    deleted: Mutex<HashSet<u64>>,
    channel_missing: AtomicBool,
    failing: AtomicBool,
    calls: Mutex<Vec<ChannelCall>>,
    published: Mutex<Vec<RenderedStatus>>,
}

impl MockStatusChannel {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1000),
            deleted: Mutex::new(HashSet::new()),
            channel_missing: AtomicBool::new(false),
            failing: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
            published: Mutex::new(Vec::new()),
        }
    }

    /// Simulates someone deleting a previously sent message.
    pub fn delete_message(&self, message_id: u64) {
        self.deleted.lock().unwrap().insert(message_id);
    }

    pub fn set_channel_missing(&self, missing: bool) {
        self.channel_missing.store(missing, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<ChannelCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the recorded calls, keeping sent messages and failure settings.
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn send_count(&self) -> usize {
        self.count(|call| matches!(call, ChannelCall::Send(_)))
    }

    pub fn edit_count(&self) -> usize {
        self.count(|call| matches!(call, ChannelCall::Edit(_)))
    }

    pub fn fetch_count(&self) -> usize {
        self.count(|call| matches!(call, ChannelCall::Fetch(_)))
    }

    /// Most recent status passed to `send_message` or `edit_message`.
    pub fn last_published(&self) -> Option<RenderedStatus> {
        self.published.lock().unwrap().last().cloned()
    }

    fn count(&self, predicate: impl Fn(&ChannelCall) -> bool) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| predicate(call))
            .count()
    }

    fn record(&self, call: ChannelCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn transient_error(&self) -> Result<(), ChannelError> {
        if self.failing.load(Ordering::SeqCst) {
            let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
            return Err(ChannelError::Discord(Box::new(serenity::Error::from(io))));
        }
        Ok(())
    }

    fn ensure_exists(&self, message_id: u64) -> Result<(), ChannelError> {
        let sent = message_id < self.next_id.load(Ordering::SeqCst) && message_id >= 1000;
        if !sent || self.deleted.lock().unwrap().contains(&message_id) {
            return Err(ChannelError::NotFound("Unknown Message".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StatusChannel for MockStatusChannel {
    async fn check_channel(&self) -> Result<(), ChannelError> {
        self.record(ChannelCall::CheckChannel);
        if self.channel_missing.load(Ordering::SeqCst) {
            return Err(ChannelError::NotFound("Unknown Channel".to_string()));
        }
        self.transient_error()
    }

    async fn send_message(&self, rendered: &RenderedStatus) -> Result<u64, ChannelError> {
        self.transient_error()?;
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.record(ChannelCall::Send(message_id));
        self.published.lock().unwrap().push(rendered.clone());
        Ok(message_id)
    }

    async fn fetch_message(&self, message_id: u64) -> Result<(), ChannelError> {
        self.record(ChannelCall::Fetch(message_id));
        self.transient_error()?;
        self.ensure_exists(message_id)
    }

    async fn edit_message(
        &self,
        message_id: u64,
        rendered: &RenderedStatus,
    ) -> Result<(), ChannelError> {
        self.record(ChannelCall::Edit(message_id));
        self.transient_error()?;
        self.ensure_exists(message_id)?;
        self.published.lock().unwrap().push(rendered.clone());
        Ok(())
    }
}
