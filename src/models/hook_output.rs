//! Streaming access to the log output of a hook run.

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::client::{segment, LakeClient};
use crate::error::{LakeError, Result};
use crate::models::hook_run::hooks_path;
use crate::validate::require_id;

/// Raw output of a hook run.
///
/// The body is not read until one of the consuming methods is called,
/// so large outputs can be streamed chunk by chunk.
#[derive(Debug)]
pub struct HookOutput {
    response: Response,
}

impl HookOutput {
    /// The `Content-Type` reported by the server, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// The body length, if the server announced it.
    pub fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    /// Read the next chunk of output. Returns `None` at the end.
    pub async fn next_chunk(&mut self) -> Result<Option<Bytes>> {
        self.response.chunk().await.map_err(LakeError::HttpError)
    }

    /// Convert into a stream of chunks.
    pub fn into_stream(self) -> impl Stream<Item = Result<Bytes>> + Send {
        self.response.bytes_stream().map_err(LakeError::HttpError)
    }

    /// Copy the whole output into `writer` without buffering it in memory.
    ///
    /// Returns the number of bytes written.
    pub async fn copy_to<W>(mut self, writer: &mut W) -> Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.next_chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }

    /// Buffer the whole output.
    pub async fn bytes(self) -> Result<Bytes> {
        self.response.bytes().await.map_err(LakeError::HttpError)
    }

    /// Buffer the whole output as text (lossy for non UTF-8 bytes).
    pub async fn text(self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Open the output of one hook run.
///
/// # Arguments
///
/// * `client` - The lakeFS API client
/// * `repository` - Repository name
/// * `run_id` - Run identifier
/// * `hook_run_id` - Hook run identifier
///
/// # Example
///
/// ```ignore
/// use lakeapi::{get_run_hook_output, LakeClient};
///
/// let client = LakeClient::from_env()?;
/// let output = get_run_hook_output(&client, "repo1", "run1", "0000_0000").await?;
/// output.copy_to(&mut tokio::io::stdout()).await?;
/// ```
#[tracing::instrument(skip(client))]
pub async fn get_run_hook_output(
    client: &LakeClient,
    repository: &str,
    run_id: &str,
    hook_run_id: &str,
) -> Result<HookOutput> {
    require_id("repository", repository)?;
    require_id("run_id", run_id)?;
    require_id("hook_run_id", hook_run_id)?;

    let path = format!(
        "{}/{}/output",
        hooks_path(repository, run_id),
        segment(hook_run_id)
    );

    let response = client.get_stream(&path).await?;
    Ok(HookOutput { response })
}
