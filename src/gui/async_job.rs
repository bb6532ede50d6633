//! Background data jobs for the GUI.
//!
//! Each fetch runs on its own thread with a current-thread tokio runtime;
//! the UI thread polls the handle once per frame. One job per view at a
//! time, guarded by the `Option` the handle lives in.

use anyhow::{anyhow, Result};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Handle to a background fetch producing a single `Result<T>`.
pub struct AsyncJob<T> {
    receiver: Option<Receiver<Result<T>>>,
}

impl<T: Send + 'static> AsyncJob<T> {
    /// Spawn the future produced by `builder` on a fresh worker thread and
    /// return a pollable handle.
    pub fn spawn<B, F>(builder: B) -> Self
    where
        B: FnOnce() -> F + Send + 'static,
        F: std::future::Future<Output = Result<T>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            let _ = tx.send(result);
        });
        Self { receiver: Some(rx) }
    }

    /// Poll for completion. Returns `Some(result)` exactly once; a dropped
    /// worker surfaces as an error.
    pub fn poll(&mut self) -> Option<Result<T>> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(res) => {
                    self.receiver = None;
                    return Some(res);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(anyhow!("Worker task disconnected")));
                }
            }
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}
