use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::StoragePath;

#[derive(Default)]
pub struct InMemoryAudioStore {
    files: Mutex<HashMap<String, Bytes>>,
}

impl InMemoryAudioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lock_error() -> AudioStoreError {
        AudioStoreError::Io(io::Error::other("audio store lock poisoned"))
    }
}

#[async_trait::async_trait]
impl AudioStore for InMemoryAudioStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, AudioStoreError> {
        let mut buffer = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }
        let size = buffer.len() as u64;
        self.files
            .lock()
            .map_err(|_| Self::lock_error())?
            .insert(path.as_str().to_string(), buffer.freeze());
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Bytes, AudioStoreError> {
        self.files
            .lock()
            .map_err(|_| Self::lock_error())?
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| AudioStoreError::NotFound(path.to_string()))
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), AudioStoreError> {
        self.files
            .lock()
            .map_err(|_| Self::lock_error())?
            .remove(path.as_str());
        Ok(())
    }
}
