//! The conversion pipeline: one attempt from share URL to upload receipt.
//!
//! Stages run strictly in sequence - parse, derive keys, resolve,
//! download, upload - because each stage's output is the next stage's
//! input. There is no retry anywhere: every error is terminal for the
//! attempt and the decision to re-run belongs to the caller.

use std::sync::Arc;

use relink_core::{
    ConversionOutcome, ConvertError, ConvertEvent, ConvertEventSink, ConvertResult, OutcomeSink,
    SourceResolver, UploadReceipt, Uploader,
};
use relink_mega::{decode_key, parse};

use crate::fetch::{ProgressCallback, StreamDownloader};
use crate::session::timestamped_file_name;

/// Collaborators one pipeline instance is wired against.
///
/// All are shared read-only handles; the pipeline holds no cross-attempt
/// state, so any number of attempts can run concurrently over the same
/// dependencies.
pub struct PipelineDeps {
    /// Resolves file ids into ephemeral download URLs.
    pub resolver: Arc<dyn SourceResolver>,
    /// Receives the finished file.
    pub uploader: Arc<dyn Uploader>,
    /// Records attempt outcomes, fire-and-forget.
    pub outcomes: Arc<dyn OutcomeSink>,
    /// Receives a progress event at each stage transition.
    pub events: Arc<dyn ConvertEventSink>,
}

/// One conversion attempt.
///
/// The value is consumed by [`run`](Self::run): one instance handles
/// exactly one attempt and is discarded afterward. Dropping the returned
/// future mid-flight still releases the attempt's scoped storage, because
/// the download session owns it.
pub struct ConversionPipeline {
    deps: PipelineDeps,
    downloader: StreamDownloader,
}

impl ConversionPipeline {
    /// Wire a pipeline against its collaborators.
    #[must_use]
    pub fn new(deps: PipelineDeps, downloader: StreamDownloader) -> Self {
        Self { deps, downloader }
    }

    /// Run the attempt for `share_url`.
    ///
    /// On success the local file has already been handed to the uploader
    /// (while its scoped storage was still alive) and the host's receipt
    /// comes back. On failure the terminal error surfaces verbatim after
    /// the failed event is emitted and the outcome recorded.
    pub async fn run(self, share_url: &str) -> ConvertResult<UploadReceipt> {
        // Idle -> Parsed
        let reference = match parse(share_url) {
            Ok(reference) => reference,
            Err(e) => return Err(self.fail(e.into()).await),
        };
        self.deps
            .events
            .emit(ConvertEvent::parsed(reference.file_id.clone()));

        // Parsed -> KeyDerived. The shared key feeds the derived material;
        // the file key is decoded the same way but nothing consumes it yet.
        let key_material = match decode_key(&reference.encoded_shared_key) {
            Ok(material) => material,
            Err(e) => return Err(self.fail(e.into()).await),
        };
        if let Err(e) = decode_key(&reference.encoded_file_key) {
            return Err(self.fail(e.into()).await);
        }
        self.deps
            .events
            .emit(ConvertEvent::key_derived(key_material.raw_shared_key.len()));

        // KeyDerived -> Resolved
        let resolved = match self.deps.resolver.resolve(&reference.file_id).await {
            Ok(resolved) => resolved,
            Err(e) => return Err(self.fail(e).await),
        };
        self.deps
            .events
            .emit(ConvertEvent::resolved(resolved.declared_size));

        // Resolved -> Downloading -> Completed
        let progress_events = self.deps.events.clone_box();
        let progress: ProgressCallback = Box::new(move |written, declared| {
            progress_events.emit(ConvertEvent::downloading(written, declared));
        });

        let session = match self
            .downloader
            .download(
                &resolved.ephemeral_url,
                &timestamped_file_name(),
                resolved.declared_size,
                Some(&progress),
            )
            .await
        {
            Ok(session) => session,
            Err(e) => return Err(self.fail(e).await),
        };
        self.deps
            .events
            .emit(ConvertEvent::completed(session.bytes_written()));

        // Hand-off happens while the session (and the file) is still alive.
        let receipt = match self.deps.uploader.upload(session.local_path()).await {
            Ok(receipt) => receipt,
            Err(e) => return Err(self.fail(e).await),
        };

        let outcome = ConversionOutcome::success(session.local_path());
        tracing::info!(
            target: "relink.pipeline",
            file_id = %reference.file_id,
            bytes_written = session.bytes_written(),
            download_page = %receipt.download_page_url,
            outcome = ?outcome,
            "conversion attempt completed"
        );
        self.deps.outcomes.report_outcome(true).await;

        Ok(receipt)
    }

    /// Terminal failure path: emit the failed event, record the outcome,
    /// and give the error back to the caller.
    async fn fail(&self, error: ConvertError) -> ConvertError {
        let outcome = ConversionOutcome::failure(&error);
        tracing::warn!(
            target: "relink.pipeline",
            kind = error.kind().as_str(),
            outcome = ?outcome,
            "conversion attempt failed"
        );
        self.deps.events.emit(ConvertEvent::failed(&error));
        self.deps.outcomes.report_outcome(false).await;
        error
    }
}
