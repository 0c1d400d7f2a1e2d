//! Submission sinks
//!
//! Accepted registrations are handed to exactly one sink, chosen by config.

use crate::config::{SinkKind, TuiConfig};
use crate::submit::Submission;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Destination for accepted submissions, mockable in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Emit one accepted submission
    async fn emit(&mut self, submission: &Submission) -> Result<()>;

    /// Called once after the terminal has been restored
    async fn finish(&mut self) -> Result<()>;
}

/// Emits each submission as a structured log event
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn emit(&mut self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(id = %submission.id, %payload, "Registration submitted");
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Buffers submissions and prints them once the TUI has exited
#[derive(Debug, Default)]
pub struct StdoutSink {
    pending: Vec<String>,
}

#[async_trait]
impl SubmissionSink for StdoutSink {
    async fn emit(&mut self, submission: &Submission) -> Result<()> {
        self.pending.push(serde_json::to_string_pretty(submission)?);
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        self.write_pending(&mut tokio::io::stdout()).await
    }
}

impl StdoutSink {
    /// Write and drop every buffered submission, one document per entry
    async fn write_pending<W>(&mut self, out: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send,
    {
        for entry in self.pending.drain(..) {
            out.write_all(entry.as_bytes()).await?;
            out.write_all(b"\n").await?;
        }
        out.flush().await?;
        Ok(())
    }
}

/// Appends one JSON document per line to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SubmissionSink for FileSink {
    async fn emit(&mut self, submission: &Submission) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(id = %submission.id, path = %self.path.display(), "Registration written");
        Ok(())
    }

    async fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Build the sink selected by the config
pub fn from_config(config: &TuiConfig) -> Result<Box<dyn SubmissionSink>> {
    let sink: Box<dyn SubmissionSink> = match config.sink_kind() {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Stdout => Box::new(StdoutSink::default()),
        SinkKind::File => {
            let path = config
                .output_path()
                .ok_or_else(|| anyhow!("No output path configured for the file sink"))?;
            Box::new(FileSink::new(path))
        }
    };
    Ok(sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormFields;
    use chrono::Utc;
    use uuid::Uuid;

    fn submission(username: &str) -> Submission {
        Submission {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            fields: FormFields {
                full_name: "Grace Hopper".to_string(),
                username: username.to_string(),
                password: "Cobol#1959".to_string(),
                specialization: "Backend".to_string(),
                years_experience: "40".to_string(),
                description: "d".repeat(120),
            },
        }
    }

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("devreg-tui-{}", Uuid::new_v4()))
            .join("submissions.jsonl")
    }

    #[tokio::test]
    async fn test_log_sink_accepts_submission() {
        let mut sink = LogSink;
        assert!(sink.emit(&submission("grace1")).await.is_ok());
        assert!(sink.finish().await.is_ok());
    }

    #[tokio::test]
    async fn test_stdout_sink_buffers_until_finish() {
        let mut sink = StdoutSink::default();
        sink.emit(&submission("grace1")).await.unwrap();
        sink.emit(&submission("grace2")).await.unwrap();
        assert_eq!(sink.pending.len(), 2);

        let mut out: Vec<u8> = Vec::new();
        sink.write_pending(&mut out).await.unwrap();
        assert!(sink.pending.is_empty());

        let written = String::from_utf8(out).unwrap();
        let first = written.find("\"username\": \"grace1\"").unwrap();
        let second = written.find("\"username\": \"grace2\"").unwrap();
        assert!(first < second);
        assert!(written.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_stdout_sink_with_nothing_pending_writes_nothing() {
        let mut sink = StdoutSink::default();
        let mut out: Vec<u8> = Vec::new();
        sink.write_pending(&mut out).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let path = temp_path();
        let mut sink = FileSink::new(path.clone());
        sink.emit(&submission("grace1")).await.unwrap();
        sink.emit(&submission("grace2")).await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Submission = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.fields.username, "grace2");
        assert_eq!(parsed.fields.years_experience, "40");

        if let Some(dir) = path.parent() {
            let _ = tokio::fs::remove_dir_all(dir).await;
        }
    }

    #[test]
    fn test_from_config_builds_each_kind() {
        for kind in [SinkKind::Log, SinkKind::Stdout, SinkKind::File] {
            let config = TuiConfig {
                sink: Some(kind),
                output_path: Some(temp_path()),
                ..Default::default()
            };
            assert!(from_config(&config).is_ok());
        }
    }

    #[test]
    fn test_from_config_sink_is_usable() {
        let config = TuiConfig {
            sink: Some(SinkKind::Stdout),
            ..Default::default()
        };
        let mut sink = from_config(&config).unwrap();
        let result = tokio_test::block_on(sink.emit(&submission("grace1")));
        assert!(result.is_ok());
    }
}
