use fanyi_correct::CorrectClient;
use fanyi_types::AppEvent;
use kanal::AsyncSender;

use crate::coordinator::AutoTranslateCoordinator;

/// One correction round trip over the current input text. The result is
/// parked on the coordinator until the user accepts or rejects it; all
/// failures surface to the presenter, nothing is retried.
pub async fn handle_request_correction(
    coordinator: &mut AutoTranslateCoordinator,
    correct_client: &CorrectClient,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let original = coordinator.session().input_text.clone();

    match correct_client.correct_text(&original).await {
        Ok(result) => {
            tracing::info!(
                confidence = result.confidence,
                corrections = result.corrections.len(),
                "correction round trip finished"
            );
            coordinator.set_pending_correction(result.clone());
            app_to_ui_tx
                .send(AppEvent::ShowCorrection { original, result })
                .await?;
        }
        Err(e) => {
            tracing::warn!(error = %e, "correction failed");
            app_to_ui_tx.send(AppEvent::ShowError(e.to_string())).await?;
        }
    }

    Ok(())
}
