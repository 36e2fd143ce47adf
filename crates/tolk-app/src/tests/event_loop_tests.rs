use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::time::timeout;
use tolk_types::{AppEvent, TranslationModel, ViewState};

use super::support::{ScriptedApi, catalog, language, translated};
use crate::controller::TranslateController;
use crate::events::{ChannelSet, event_loop};

async fn next_model_where(
    rx: &AsyncReceiver<AppEvent>,
    predicate: impl Fn(&TranslationModel) -> bool,
) -> TranslationModel {
    loop {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timed out waiting for a snapshot")
            .expect("channel open");
        if let AppEvent::StatePublished(ViewState::DataLoaded(model)) = event {
            if predicate(&model) {
                return model;
            }
        }
    }
}

#[tokio::test]
async fn event_loop_seeds_catalog_and_routes_intents() {
    let api = ScriptedApi::with_catalog(catalog());
    api.queue_translation(Ok(translated("Hola")));

    let channels = ChannelSet::new();
    let controller = Arc::new(TranslateController::new(
        api,
        channels.app_to_ui.0.clone(),
    ));
    let loop_handle = tokio::spawn(event_loop(
        controller.clone(),
        channels.ui_to_app.1.clone(),
    ));

    let ui_tx = channels.ui_to_app.0.clone();
    let app_rx = channels.app_to_ui.1.clone();

    // Startup fetch publishes the seeded model without any intent.
    let seeded = next_model_where(&app_rx, |_| true).await;
    assert_eq!(seeded.target_language.code, "en");
    assert!(seeded.source_language.is_auto_detect());

    ui_tx
        .send(AppEvent::SourceLanguageChanged(language("en", "English")))
        .await
        .expect("send intent");
    ui_tx
        .send(AppEvent::TextChanged("Hello".to_string()))
        .await
        .expect("send intent");
    ui_tx.send(AppEvent::Search).await.expect("send intent");

    let final_model = next_model_where(&app_rx, |model| !model.translated_text.is_empty()).await;
    assert_eq!(final_model.translated_text, "Hola");
    assert_eq!(final_model.text, "Hello");

    // Closing the intent channel shuts the loop down.
    drop(ui_tx);
    drop(channels);
    let result = timeout(Duration::from_secs(1), loop_handle)
        .await
        .expect("loop exits")
        .expect("loop task joins");
    assert!(result.is_err());
}

#[tokio::test]
async fn swap_intent_round_trips_through_the_loop() {
    let api = ScriptedApi::with_catalog(catalog());

    let channels = ChannelSet::new();
    let controller = Arc::new(TranslateController::new(
        api,
        channels.app_to_ui.0.clone(),
    ));
    let _loop_handle = tokio::spawn(event_loop(
        controller.clone(),
        channels.ui_to_app.1.clone(),
    ));

    let ui_tx = channels.ui_to_app.0.clone();
    let app_rx = channels.app_to_ui.1.clone();

    next_model_where(&app_rx, |_| true).await;
    ui_tx
        .send(AppEvent::SourceLanguageChanged(language("es", "Spanish")))
        .await
        .expect("send intent");
    ui_tx.send(AppEvent::SwapLanguages).await.expect("send intent");

    let swapped = next_model_where(&app_rx, |model| model.source_language.code == "en").await;
    assert_eq!(swapped.target_language.code, "es");
}
