pub mod error_banner;
pub mod loading_overlay;
pub mod name_prompt;
pub mod result_modal;
pub mod share_modal;
pub mod word_modal;

pub use error_banner::ErrorBanner;
pub use loading_overlay::LoadingOverlay;
pub use name_prompt::NamePrompt;
pub use result_modal::ResultModal;
pub use share_modal::ShareModal;
pub use word_modal::WordModal;
