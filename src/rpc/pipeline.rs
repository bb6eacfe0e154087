// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reader pipeline.
//!
//! Wraps the input stream in the line codec on a background task and
//! forwards frames to the server loop over a channel.

use futures_util::StreamExt;
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio_util::codec::FramedRead;
use tracing::error;

use crate::rpc::codec::{LineCodec, LineFrame};

/// Messages arriving from the client input stream
#[derive(Debug)]
pub enum LineEvent {
    /// A non-blank request line
    Line(String),
    /// Framing fault (over-long line); carries a human-readable detail
    Error(String),
    /// Client disconnected (EOF)
    Disconnect,
}

/// Spawns a background task that reads framed lines from `stream`.
pub fn spawn_line_reader<R>(stream: R, tx: mpsc::Sender<LineEvent>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut framed = FramedRead::new(stream, LineCodec::new());

        while let Some(result) = framed.next().await {
            let event = match result {
                Ok(LineFrame::Line(line)) => LineEvent::Line(line),
                Ok(LineFrame::Oversize(len)) => {
                    error!("Dropped over-long request line ({} bytes)", len);
                    LineEvent::Error(format!("request line too long: {} bytes", len))
                }
                Err(e) => {
                    error!("Framing error: {}", e);
                    LineEvent::Error(e.to_string())
                }
            };
            if tx.send(event).await.is_err() {
                break;
            }
        }
        let _ = tx.send(LineEvent::Disconnect).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reader_forwards_lines_and_disconnect() {
        let (tx, mut rx) = mpsc::channel(32);
        let input: &[u8] = b"{\"a\":1}\n\n{\"b\":2}\n";
        spawn_line_reader(input, tx);

        match rx.recv().await {
            Some(LineEvent::Line(l)) => assert_eq!(l, "{\"a\":1}"),
            other => panic!("expected line, got {:?}", other),
        }
        match rx.recv().await {
            Some(LineEvent::Line(l)) => assert_eq!(l, "{\"b\":2}"),
            other => panic!("expected line, got {:?}", other),
        }
        assert!(matches!(rx.recv().await, Some(LineEvent::Disconnect)));
        assert!(rx.recv().await.is_none());
    }
}
