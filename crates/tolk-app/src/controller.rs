use std::sync::atomic::{AtomicU64, Ordering};

use kanal::AsyncSender;
use tokio::sync::RwLock;
use tolk_translator::TranslateApi;
use tolk_types::{AppEvent, ErrorCause, Language, TranslationModel, ViewState};

/// Owner of the screen's view state.
///
/// Holds the single source of truth, replaces it wholesale on every
/// transition, and mirrors each new value to the surface as a
/// `StatePublished` event. Transitions that leave the model unchanged are
/// dropped without publishing.
pub struct TranslateController<A> {
    api: A,
    state: RwLock<ViewState<TranslationModel>>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    search_seq: AtomicU64,
}

impl<A: TranslateApi> TranslateController<A> {
    pub fn new(api: A, app_to_ui_tx: AsyncSender<AppEvent>) -> Self {
        Self {
            api,
            state: RwLock::new(ViewState::Loading),
            app_to_ui_tx,
            search_seq: AtomicU64::new(0),
        }
    }

    /// Current snapshot
    pub async fn state(&self) -> ViewState<TranslationModel> {
        self.state.read().await.clone()
    }

    /// Load or reload the language catalog. Seeds a fresh model unless one
    /// is already loaded, in which case only the catalog is replaced.
    pub async fn fetch_languages(&self) {
        match self.api.fetch_languages().await {
            Ok(languages) => {
                let current = self.state.read().await.loaded().cloned();
                let next = match current {
                    Some(model) => model.with_languages(languages),
                    None => TranslationModel::seeded(languages),
                };
                match next {
                    Some(model) => self.publish(ViewState::DataLoaded(model)).await,
                    None => {
                        self.publish(ViewState::Error(ErrorCause::EmptyCatalog))
                            .await
                    }
                }
            }
            Err(err) => {
                tracing::error!("language fetch failed: {err}");
                self.publish(ViewState::Error(err.into())).await;
            }
        }
    }

    pub async fn on_text_change(&self, text: String) {
        self.update_loaded(|model| model.text = text).await;
    }

    pub async fn on_source_language_change(&self, language: Language) {
        self.update_loaded(|model| model.source_language = language)
            .await;
    }

    pub async fn on_target_language_change(&self, language: Language) {
        self.update_loaded(|model| model.target_language = language)
            .await;
    }

    /// Exchange source and target. Refused while source is auto-detect:
    /// the sentinel is never a valid target.
    pub async fn on_swap_language_click(&self) {
        self.update_loaded(|model| {
            if model.source_language.is_auto_detect() {
                return;
            }
            std::mem::swap(&mut model.source_language, &mut model.target_language);
        })
        .await;
    }

    /// Submit the current text for translation. A response that resolves
    /// after a newer submit was issued is dropped.
    pub async fn on_search(&self) {
        let Some(model) = self.state.read().await.loaded().cloned() else {
            return;
        };
        // TODO: run detection here once the detect endpoint is wired up.
        if model.source_language.is_auto_detect() {
            tracing::debug!("search skipped: source language is auto-detect");
            return;
        }

        let seq = self.search_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = self
            .api
            .translate_text(
                &model.text,
                &model.source_language.code,
                &model.target_language.code,
            )
            .await;

        let mut guard = self.state.write().await;
        if self.search_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("dropping translation response superseded by a newer search");
            return;
        }
        *guard = match outcome {
            Ok(translated) => ViewState::DataLoaded(TranslationModel {
                translated_text: translated.text,
                ..model
            }),
            Err(err) => {
                tracing::error!("translation failed: {err}");
                ViewState::Error(err.into())
            }
        };
        let snapshot = guard.clone();
        let _ = self
            .app_to_ui_tx
            .send(AppEvent::StatePublished(snapshot))
            .await;
    }

    /// Single-field update against the loaded model, ignored while the
    /// screen is not loaded.
    async fn update_loaded(&self, update: impl FnOnce(&mut TranslationModel)) {
        let mut guard = self.state.write().await;
        let ViewState::DataLoaded(model) = &*guard else {
            return;
        };
        let mut next = model.clone();
        update(&mut next);
        if next == *model {
            return;
        }
        *guard = ViewState::DataLoaded(next);
        let snapshot = guard.clone();
        let _ = self
            .app_to_ui_tx
            .send(AppEvent::StatePublished(snapshot))
            .await;
    }

    async fn publish(&self, next: ViewState<TranslationModel>) {
        let mut guard = self.state.write().await;
        *guard = next;
        let snapshot = guard.clone();
        let _ = self
            .app_to_ui_tx
            .send(AppEvent::StatePublished(snapshot))
            .await;
    }
}
