//! Remote debugging server using WebSocket protocol.
//!
//! This module provides a WebSocket server for remote debugging,
//! allowing connection from browser-based DevTools.

#![allow(dead_code)]

use std::sync::Arc;

/// Remote debugging server.
///
/// Provides a WebSocket server that external DevTools can connect to
/// for remote inspection and debugging.
///
/// # Example
///
/// ```rust,ignore
/// use flui_devtools::remote::RemoteDebugServer;
///
/// let server = RemoteDebugServer::new("127.0.0.1:9222");
/// server.start();
///
/// // Server is now listening for connections
/// println!("DevTools URL: ws://127.0.0.1:9222");
/// ```
#[derive(Debug)]
pub struct RemoteDebugServer {
    address: String,
    running: bool,
}

impl RemoteDebugServer {
    /// Creates a new remote debug server.
    ///
    /// # Arguments
    ///
    /// * `address` - The address to bind to (e.g., "127.0.0.1:9222")
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            running: false,
        }
    }

    /// Starts the debug server.
    ///
    /// The server will listen for WebSocket connections on the configured address.
    pub fn start(&mut self) {
        self.running = true;
        // TODO: Implement WebSocket server
    }

    /// Stops the debug server.
    pub fn stop(&mut self) {
        self.running = false;
        // TODO: Implement shutdown
    }

    /// Returns whether the server is currently running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the server address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the WebSocket URL that clients can connect to.
    pub fn ws_url(&self) -> String {
        format!("ws://{}", self.address)
    }
}

/// A remote debugging client connection.
#[derive(Debug)]
pub struct RemoteClient {
    id: u64,
    address: String,
}

impl RemoteClient {
    /// Returns the client ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the client's remote address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sends a message to the client.
    pub fn send(&self, _message: &str) {
        // TODO: Implement message sending
    }
}

/// Remote debugging protocol message types.
#[derive(Debug, Clone)]
pub enum DebugMessage {
    /// Request widget tree inspection
    InspectWidget { widget_id: u64 },
    /// Request performance data
    GetPerformance,
    /// Request memory snapshot
    GetMemory,
    /// Generic command
    Command { method: String, params: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_server_creation() {
        let server = RemoteDebugServer::new("127.0.0.1:9222");
        assert_eq!(server.address(), "127.0.0.1:9222");
        assert!(!server.is_running());
        assert_eq!(server.ws_url(), "ws://127.0.0.1:9222");
    }
}
