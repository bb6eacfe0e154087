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

//! Transport Codec.
//!
//! Handles the low-level framing of newline-delimited JSON-RPC messages.
//! The decoder deals in raw lines; JSON parsing happens in the dispatcher
//! so that parse failures become wire error responses, not stream errors.
//! Blank lines are consumed without producing a frame.

use anyhow::Result;
use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use crate::core::constants::limits;
use crate::core::models::JsonRpcResponse;

/// One decoded input frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineFrame {
    /// A non-blank line, whitespace-trimmed.
    Line(String),
    /// A line that exceeded the transport limit. Carries the observed
    /// length; the offending bytes have already been discarded and the
    /// stream is positioned at the next line.
    Oversize(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    Scanning,
    /// Discarding an over-long line until its terminating newline.
    /// Carries the byte count dropped so far.
    Discarding(usize),
}

pub struct LineCodec {
    state: DecodeState,
    max_line_bytes: usize,
}

impl LineCodec {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: DecodeState::Scanning,
            max_line_bytes: limits::MAX_LINE_BYTES,
        }
    }

    #[cfg(test)]
    fn with_max_line_bytes(max_line_bytes: usize) -> Self {
        Self {
            state: DecodeState::Scanning,
            max_line_bytes,
        }
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = LineFrame;
    type Error = anyhow::Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<LineFrame>> {
        loop {
            match self.state {
                DecodeState::Scanning => {
                    let Some(i) = src.iter().position(|&b| b == b'\n') else {
                        if src.len() > self.max_line_bytes {
                            self.state = DecodeState::Discarding(src.len());
                            src.clear();
                        }
                        return Ok(None);
                    };

                    if i > self.max_line_bytes {
                        src.advance(i + 1);
                        return Ok(Some(LineFrame::Oversize(i)));
                    }

                    let raw = src.split_to(i + 1);
                    // Lossy conversion keeps the one-response-per-line
                    // contract even for invalid UTF-8; the dispatcher
                    // reports the resulting parse failure.
                    let line = String::from_utf8_lossy(&raw).trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    return Ok(Some(LineFrame::Line(line)));
                }
                DecodeState::Discarding(dropped) => {
                    if let Some(i) = src.iter().position(|&b| b == b'\n') {
                        src.advance(i + 1);
                        self.state = DecodeState::Scanning;
                        return Ok(Some(LineFrame::Oversize(dropped + i)));
                    }
                    self.state = DecodeState::Discarding(dropped + src.len());
                    src.clear();
                    return Ok(None);
                }
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<LineFrame>> {
        if let Some(frame) = self.decode(src)? {
            return Ok(Some(frame));
        }
        match self.state {
            // EOF terminates an over-long line just like a newline would.
            DecodeState::Discarding(dropped) => {
                self.state = DecodeState::Scanning;
                Ok(Some(LineFrame::Oversize(dropped)))
            }
            DecodeState::Scanning => {
                // Trailing line without a final newline still counts.
                if src.is_empty() {
                    return Ok(None);
                }
                let raw = src.split_to(src.len());
                let line = String::from_utf8_lossy(&raw).trim().to_string();
                if line.is_empty() {
                    return Ok(None);
                }
                Ok(Some(LineFrame::Line(line)))
            }
        }
    }
}

impl<'a> Encoder<&'a JsonRpcResponse> for LineCodec {
    type Error = anyhow::Error;

    fn encode(&mut self, item: &'a JsonRpcResponse, dst: &mut BytesMut) -> Result<()> {
        let body = serde_json::to_vec(item)?;
        dst.extend_from_slice(&body);
        dst.extend_from_slice(b"\n");
        Ok(())
    }
}
