use crate::domain::RelayNotification;
use crate::foundation::util::encoding::encode_hex_short;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

const SHORT_CONTENT_DISPLAY_LENGTH: usize = 48;

/// Receives every committed notification, in commit order.
///
/// Delivery is best-effort: `publish` cannot fail the operation that produced the notification,
/// so a sink that hits an I/O error logs it at warn and drops the entry.
pub trait NotificationSink: Send + Sync {
    fn publish(&self, notification: &RelayNotification);
}

/// Append-only in-memory notification log.
#[derive(Default)]
pub struct MemoryNotificationLog {
    entries: Mutex<Vec<RelayNotification>>,
}

impl MemoryNotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<RelayNotification> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for MemoryNotificationLog {
    fn publish(&self, notification: &RelayNotification) {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).push(notification.clone());
    }
}

/// Shared handles publish into the same log.
impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn publish(&self, notification: &RelayNotification) {
        (**self).publish(notification)
    }
}

/// Emits notifications through the `log` facade: JSON at debug, a summary at info.
pub struct StructuredNotificationLogger;

impl NotificationSink for StructuredNotificationLogger {
    fn publish(&self, notification: &RelayNotification) {
        let json = to_json_line(notification);
        debug!(target: "relay::notify::json", "notification notification={}", json);
        info!(target: "relay::notify::human", "notification summary={}", human_summary(notification));
    }
}

/// Appends one JSON document per line to a file.
pub struct FileNotificationLog {
    file: Mutex<std::fs::File>,
}

impl FileNotificationLog {
    pub fn new(path: &std::path::Path) -> std::io::Result<Self> {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Mutex::new(file) })
    }
}

impl NotificationSink for FileNotificationLog {
    fn publish(&self, notification: &RelayNotification) {
        use std::io::Write;

        let json = to_json_line(notification);
        match self.file.lock() {
            Ok(mut file) => {
                if let Err(err) = writeln!(file, "{}", json) {
                    warn!("notify: failed to write notification to file error={}", err);
                    return;
                }
                if let Err(err) = file.flush() {
                    warn!("notify: failed to flush notification file error={}", err);
                }
            }
            Err(err) => {
                warn!("notify: failed to lock notification file mutex error={}", err);
            }
        }
    }
}

/// Fans a notification out to every registered sink.
#[derive(Default)]
pub struct MultiNotificationSink {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl MultiNotificationSink {
    pub fn new() -> Self {
        Self { sinks: vec![] }
    }

    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl NotificationSink for MultiNotificationSink {
    fn publish(&self, notification: &RelayNotification) {
        for sink in &self.sinks {
            sink.publish(notification);
        }
    }
}

fn to_json_line(notification: &RelayNotification) -> String {
    match serde_json::to_string(notification) {
        Ok(json) => json,
        Err(err) => {
            warn!("notify: failed to serialize notification kind={} error={}", notification.kind(), err);
            "{\"type\":\"serialize_failed\"}".to_string()
        }
    }
}

fn short_content(content: &str) -> String {
    match content.char_indices().nth(SHORT_CONTENT_DISPLAY_LENGTH) {
        Some((cut, _)) => format!("{:?}…", &content[..cut]),
        None => format!("{:?}", content),
    }
}

fn human_summary(notification: &RelayNotification) -> String {
    match notification {
        RelayNotification::MessageSubmitted { index, sender, content, submitted_at } => format!(
            "NOTIFY: message submitted - index={} sender={} at={} content={}",
            index,
            encode_hex_short(sender.as_bytes()),
            submitted_at,
            short_content(content)
        ),
        RelayNotification::RelayerTrustChanged { relayer, trusted } => {
            format!("NOTIFY: relayer trust changed - relayer={} trusted={}", encode_hex_short(relayer.as_bytes()), trusted)
        }
        RelayNotification::MessageReceived { original_sender, content, timestamp } => format!(
            "NOTIFY: message received - original_sender={} timestamp={} content={}",
            encode_hex_short(original_sender.as_bytes()),
            timestamp,
            short_content(content)
        ),
        RelayNotification::OwnershipTransferred { previous_owner, new_owner } => format!(
            "NOTIFY: ownership transferred - previous_owner={} new_owner={}",
            encode_hex_short(previous_owner.as_bytes()),
            encode_hex_short(new_owner.as_bytes())
        ),
    }
}
