use crate::language::Language;
use crate::model::TranslationModel;
use crate::state::ViewState;

/// Events carried between the surface and the core.
///
/// Everything except `StatePublished` is a user intent flowing towards the
/// controller; `StatePublished` is the controller's snapshot flowing back.
#[derive(Debug, Clone)]
pub enum AppEvent {
    TextChanged(String),
    SourceLanguageChanged(Language),
    TargetLanguageChanged(Language),
    SwapLanguages,
    Search,
    RefreshLanguages,
    StatePublished(ViewState<TranslationModel>),
}
