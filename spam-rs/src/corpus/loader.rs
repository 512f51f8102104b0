//! Corpus loading
//!
//! A corpus source is either a directory holding one message per file or a
//! single mbox file. Message bytes are decoded lossily, since public spam
//! corpora contain plenty of invalid UTF-8.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{Result, SpamError};

/// Load every message from a directory or mbox file.
///
/// `max_emails` caps the number of messages, 0 for all.
pub fn load_corpus<P: AsRef<Path>>(path: P, max_emails: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)?;

    let emails = if metadata.is_dir() {
        load_dir(path, max_emails)?
    } else if metadata.is_file() {
        load_mbox(path, max_emails)?
    } else {
        return Err(SpamError::Corpus(format!(
            "{} is neither a directory nor a file",
            path.display()
        )));
    };

    info!(path = %path.display(), emails = emails.len(), "Loaded corpus");
    Ok(emails)
}

/// Load one message per regular file, in file-name order
pub fn load_dir<P: AsRef<Path>>(dir: P, max_emails: usize) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    let limit = if max_emails == 0 { usize::MAX } else { max_emails };
    let mut emails = Vec::new();
    for path in paths.into_iter().take(limit) {
        let bytes = std::fs::read(&path)?;
        emails.push(String::from_utf8_lossy(&bytes).into_owned());
    }

    debug!(dir = %dir.as_ref().display(), emails = emails.len(), "Read message files");
    Ok(emails)
}

/// Load messages from an mbox file
pub fn load_mbox<P: AsRef<Path>>(path: P, max_emails: usize) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let mut reader = MboxReader::new(file);

    let mut emails = Vec::new();
    while let Some(message) = reader.read_message()? {
        debug!(
            from = %message.from,
            bytes = message.content.len(),
            "Read mbox message"
        );
        emails.push(String::from_utf8_lossy(&message.content).into_owned());
        if 0 < max_emails && max_emails <= emails.len() {
            break;
        }
    }

    if reader.message_count() == 0 {
        warn!(path = %path.as_ref().display(), "No From_ lines found in mbox file");
    } else {
        debug!(
            path = %path.as_ref().display(),
            messages = reader.message_count(),
            "Read mbox file"
        );
    }

    Ok(emails)
}

/// A message from an mbox file
#[derive(Debug)]
pub struct MboxMessage {
    /// Sender from the From_ line
    pub from: String,
    /// Raw message content (headers + body)
    pub content: Vec<u8>,
}

/// Streaming mbox reader
pub struct MboxReader<R: Read> {
    reader: BufReader<R>,
    current_line: Vec<u8>,
    message_count: u64,
    eof: bool,
    /// current_line already holds the next From_ line
    has_pending_from: bool,
}

impl<R: Read> MboxReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            current_line: Vec::new(),
            message_count: 0,
            eof: false,
            has_pending_from: false,
        }
    }

    /// Read the next message
    pub fn read_message(&mut self) -> Result<Option<MboxMessage>> {
        if self.eof {
            return Ok(None);
        }

        if !self.has_pending_from {
            loop {
                if !self.next_line()? {
                    self.eof = true;
                    return Ok(None);
                }
                if self.current_line.starts_with(b"From ") {
                    break;
                }
            }
        }

        self.has_pending_from = false;
        let from = parse_from_line(&self.current_line);

        let mut content = Vec::new();
        loop {
            if !self.next_line()? {
                self.eof = true;
                break;
            }

            if self.current_line.starts_with(b"From ") {
                self.has_pending_from = true;
                break;
            }

            // Unescape >From lines
            let line = if self.current_line.starts_with(b">From ") {
                &self.current_line[1..]
            } else {
                &self.current_line[..]
            };
            content.extend_from_slice(line);
        }

        // Drop the blank separator line before the next From_
        while content.ends_with(b"\n\n") {
            content.pop();
        }

        self.message_count += 1;
        Ok(Some(MboxMessage { from, content }))
    }

    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    fn next_line(&mut self) -> Result<bool> {
        self.current_line.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.current_line)?;
        Ok(bytes_read > 0)
    }
}

/// Sender address from "From sender@example.com Wed Dec 25 12:00:00 2024"
fn parse_from_line(line: &[u8]) -> String {
    let line = String::from_utf8_lossy(line);
    line.trim_end()
        .split(' ')
        .nth(1)
        .unwrap_or_default()
        .to_string()
}
