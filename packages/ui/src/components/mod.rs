//! Styled wrappers over `dioxus-primitives`.

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
