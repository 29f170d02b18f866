use dioxus::prelude::*;
use dioxus_primitives::toast as primitive;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Toast region for the whole app. Views raise toasts through
/// [`crate::Feedback`] or [`use_toast`].
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        primitive::ToastProvider {
            {children}
        }
    }
}
