// Copyright 2025 The HubLink Rust Authors
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

use std::sync::Arc;

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::invocation::InvocationMessage;
use crate::registry::HandlerRegistry;

#[derive(Clone)]
pub struct DispatchServiceConfig {
    pub channel_capacity: usize,
    /// Stop draining after a handler failure instead of moving on to the next
    /// invocation.
    pub stop_on_handler_error: bool,
}

impl Default for DispatchServiceConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
            stop_on_handler_error: false,
        }
    }
}

/// Drains incoming invocations and feeds them through a [`HandlerRegistry`].
///
/// `start` spawns the drain loop and keeps the sender side; invocations are
/// queued with [`submit`](Self::submit). Invocations for targets nobody
/// registered are dropped with a warning, the way an unmatched request is
/// dropped rather than treated as fatal.
pub struct InvocationDispatchService {
    registry: Arc<HandlerRegistry>,
    config: DispatchServiceConfig,
    tx: Option<tokio::sync::mpsc::Sender<InvocationMessage>>,
}

impl InvocationDispatchService {
    pub fn new(registry: Arc<HandlerRegistry>, config: DispatchServiceConfig) -> Self {
        Self {
            registry,
            config,
            tx: None,
        }
    }

    pub fn registry(&self) -> &Arc<HandlerRegistry> {
        &self.registry
    }

    pub fn start(&mut self) {
        let (tx, mut rx) = tokio::sync::mpsc::channel(self.config.channel_capacity);
        self.tx = Some(tx);
        let registry = Arc::clone(&self.registry);
        let stop_on_handler_error = self.config.stop_on_handler_error;
        tokio::spawn(async move {
            info!("InvocationDispatchService started");
            while let Some(message) = rx.recv().await {
                match registry.dispatch(&message.target, &message.arguments) {
                    Ok(0) => {
                        warn!("No handler registered for the {}, drop it", message);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        if stop_on_handler_error {
                            error!("Stopping dispatch after failed {}: {}", message, e);
                            break;
                        }
                    }
                }
            }
            info!("InvocationDispatchService stopped");
        });
    }

    /// Queue one invocation for dispatch.
    pub async fn submit(&self, message: InvocationMessage) {
        let Some(tx) = self.tx.as_ref() else {
            warn!("Dispatch service not started, dropping the {}", message);
            return;
        };
        if let Err(e) = tx.send(message).await {
            warn!("Failed to queue the {}, service already stopped", e.0);
        }
    }

    /// Close the queue; the drain loop exits once queued invocations finish.
    pub fn shutdown(&mut self) {
        self.tx.take();
    }
}
