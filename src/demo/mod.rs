use dioxus::prelude::*;
use crate::Route;

mod follower;
mod landing;
mod magnet;

pub use follower::FollowerDemo;
pub use landing::Landing;
pub use magnet::{MagnetDemo, SmoothMagnetDemo};

const PAGE_STYLE: &str = "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;";
const BUTTON_STYLE: &str = "padding: 8px 18px; border: none; border-radius: 6px; font-size: 14px; font-weight: 600; cursor: pointer; color: white; background: #4f46e5;";

/// Back link, title and hint shared by every demo page
#[component]
fn DemoHeader(title: String, hint: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
            Link {
                to: Route::Landing {},
                style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                "\u{2190} Effects"
            }
            h2 {
                style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                "{title}"
            }
            span {
                style: "color: #6b7280; font-size: 14px;",
                "{hint}"
            }
        }
    }
}
