//! Convert command handler.
//!
//! Wires the concrete adapters into one conversion pipeline and runs a
//! single attempt. Authorization happens before anything else: an
//! operator that is not on the admin list never reaches the pipeline.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use relink_core::{
    ConvertEventSink, DENIED_MESSAGE, OutcomeSink, SourceResolver, Uploader, authorize,
};
use relink_gofile::{GofileClient, content_url};
use relink_mega::MegaClient;
use relink_store::StatsOutcomeSink;
use relink_transfer::{ConversionPipeline, PipelineDeps, StreamDownloader};

use crate::bootstrap::CliContext;
use crate::progress::ProgressSink;

/// Run one conversion attempt for `share_url` on behalf of an operator.
pub async fn execute(ctx: &CliContext, share_url: &str, operator: Option<u64>) -> Result<()> {
    let Some(operator) = operator.or(ctx.settings.operator_id) else {
        anyhow::bail!("no operator id given; pass --operator or set RELINK_OPERATOR_ID");
    };

    let admins = ctx.admins.list().await?;
    if !authorize(operator, &admins).is_authorized() {
        println!("{DENIED_MESSAGE}");
        return Ok(());
    }

    let resolver: Arc<dyn SourceResolver> = Arc::new(MegaClient::new(
        ctx.settings.effective_mega_api_base(),
        Duration::from_secs(ctx.settings.effective_resolve_timeout_secs()),
    )?);
    let uploader: Arc<dyn Uploader> = Arc::new(GofileClient::new(
        ctx.settings.effective_gofile_api_base(),
    )?);
    let outcomes: Arc<dyn OutcomeSink> = Arc::new(StatsOutcomeSink::new(ctx.stats.clone()));
    let events: Arc<dyn ConvertEventSink> = Arc::new(ProgressSink::new());
    let downloader = StreamDownloader::new(Duration::from_secs(
        ctx.settings.effective_download_timeout_secs(),
    ));

    let pipeline = ConversionPipeline::new(
        PipelineDeps {
            resolver,
            uploader,
            outcomes,
            events,
        },
        downloader,
    );

    match pipeline.run(share_url).await {
        Ok(receipt) => {
            println!("Download page: {}", receipt.download_page_url);
            println!("Content link:  {}", content_url(&receipt.content_id));
            Ok(())
        }
        Err(error) => anyhow::bail!(error.user_message()),
    }
}
