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

//! Request/response server loop.
//!
//! Strictly sequential: one line is read, dispatched, and its response
//! written and flushed before the next line is handled. The loop exits
//! when the input stream closes or on Ctrl+C.

use anyhow::Result;
use futures_util::SinkExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_util::codec::FramedWrite;
use tracing::{debug, info, warn};

use crate::core::models::JsonRpcResponse;
use crate::engine::dispatcher;
use crate::rpc::codec::LineCodec;
use crate::rpc::pipeline::{self, LineEvent};

const EVENT_CHANNEL_CAPACITY: usize = 32;

pub struct LineServer;

impl LineServer {
    /// Run the request/response loop over the given streams.
    ///
    /// Generic over the I/O pair so tests can drive the server
    /// in-process; `main` passes stdin/stdout.
    pub async fn run<R, W>(reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        let (tx_events, mut rx_events) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        pipeline::spawn_line_reader(reader, tx_events);

        // Responses are framed by the same codec that frames the input.
        let mut framed = FramedWrite::new(writer, LineCodec::new());

        loop {
            tokio::select! {
                event = rx_events.recv() => {
                    match event {
                        Some(LineEvent::Line(line)) => {
                            debug!("Handling request line ({} bytes)", line.len());
                            let resp = dispatcher::dispatch_line(&line);
                            Self::write_response(&mut framed, &resp).await?;
                        }
                        Some(LineEvent::Error(detail)) => {
                            warn!("Transport error: {}", detail);
                            let resp = dispatcher::framing_error_response(&detail);
                            Self::write_response(&mut framed, &resp).await?;
                        }
                        Some(LineEvent::Disconnect) => {
                            info!("Input stream closed. Shutting down.");
                            break;
                        }
                        None => break, // Channel closed
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl+C, shutting down.");
                    break;
                }
            }
        }

        Ok(())
    }

    async fn write_response<W>(
        framed: &mut FramedWrite<W, LineCodec>,
        resp: &JsonRpcResponse,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        // SinkExt::send flushes per response so a piped consumer can
        // pair requests and responses synchronously.
        framed.send(resp).await
    }
}
