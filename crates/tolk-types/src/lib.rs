pub mod events;
pub mod language;
pub mod model;
pub mod state;

pub use events::AppEvent;
pub use language::{AUTO_DETECT_CODE, DetectedLanguage, Language};
pub use model::{TranslatedText, TranslationModel};
pub use state::{ErrorCause, ViewState};
