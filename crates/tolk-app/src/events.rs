use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tolk_translator::TranslateApi;
use tolk_types::AppEvent;

use crate::controller::TranslateController;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

/// Core intent loop: dispatches surface events to the controller.
pub async fn event_loop<A>(
    controller: Arc<TranslateController<A>>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()>
where
    A: TranslateApi + 'static,
{
    // The screen stays on Loading until the catalog arrives.
    {
        let controller = controller.clone();
        tokio::spawn(async move { controller.fetch_languages().await });
    }

    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_event(&controller, event).await;
    }
}

async fn handle_event<A>(controller: &Arc<TranslateController<A>>, event: AppEvent)
where
    A: TranslateApi + 'static,
{
    match event {
        AppEvent::TextChanged(text) => controller.on_text_change(text).await,
        AppEvent::SourceLanguageChanged(language) => {
            controller.on_source_language_change(language).await
        }
        AppEvent::TargetLanguageChanged(language) => {
            controller.on_target_language_change(language).await
        }
        AppEvent::SwapLanguages => controller.on_swap_language_click().await,
        AppEvent::Search => {
            // Keep the loop free to take intents while the request is in flight.
            let controller = controller.clone();
            tokio::spawn(async move { controller.on_search().await });
        }
        AppEvent::RefreshLanguages => {
            let controller = controller.clone();
            tokio::spawn(async move { controller.fetch_languages().await });
        }
        AppEvent::StatePublished(_) => {
            // Surface-bound event, nothing to do here.
        }
    }
}
