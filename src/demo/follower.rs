use std::cell::RefCell;
use std::rc::Rc;

use cursor_fx::Follower;
use cursor_fx::web::{self, WebEnvironment};
use dioxus::prelude::*;

use super::{BUTTON_STYLE, DemoHeader, PAGE_STYLE};

type Slot = Rc<RefCell<Option<Follower<WebEnvironment>>>>;

#[component]
pub fn FollowerDemo() -> Element {
    let slot: Slot = use_hook(|| Rc::new(RefCell::new(None)));
    let mut running = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_drop = slot.clone();
    use_drop(move || {
        if let Some(follower) = on_drop.borrow_mut().take() {
            _ = follower.stop();
        }
    });

    let toggle = move |_: Event<MouseData>| {
        let mut current = slot.borrow_mut();
        match current.take() {
            Some(follower) => {
                if let Err(e) = follower.stop() {
                    error.set(Some(e.to_string()));
                }
                running.set(false);
            }
            None => match web::mouse_follower(None, None) {
                Ok(follower) => {
                    *current = Some(follower);
                    running.set(true);
                }
                Err(e) => error.set(Some(e.to_string())),
            },
        }
    };

    let label = if running() { "Stop following" } else { "Start following" };
    let status = if running() { "following" } else { "stopped" };

    rsx! {
        div {
            style: PAGE_STYLE,
            DemoHeader {
                title: "Follower",
                hint: "Move the pointer anywhere on the page",
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                button { style: BUTTON_STYLE, onclick: toggle, "{label}" }
                span {
                    id: "status",
                    style: "color: #22c55e; font-size: 14px; font-family: monospace;",
                    "{status}"
                }
            }
            if let Some(message) = error() {
                p { style: "color: #ef4444; font-size: 13px;", "{message}" }
            }
            // Tall page so scrolling shows the follower tracks document coordinates
            div { style: "height: 200vh;" }
        }
    }
}
