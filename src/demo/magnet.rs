use std::cell::RefCell;
use std::rc::Rc;

use cursor_fx::web::{self, WebEnvironment};
use cursor_fx::{Magnet, MagnetOptions};
use dioxus::prelude::*;
use rand::Rng;

use super::{BUTTON_STYLE, DemoHeader, PAGE_STYLE};

const TARGET_CLASS: &str = "magnet-target";
const BOARD_W: f64 = 800.0;
const BOARD_H: f64 = 480.0;
const TARGET_W: f64 = 120.0;
const TARGET_H: f64 = 44.0;

type Slot = Rc<RefCell<Option<Magnet<WebEnvironment>>>>;

/// Random top-left corners that keep every target inside the board
fn random_layout(count: usize) -> Vec<(f64, f64)> {
    let mut rng = rand::rng();
    let margin = 24.0;
    (0..count)
        .map(|_| {
            (
                rng.random_range(margin..=BOARD_W - TARGET_W - margin),
                rng.random_range(margin..=BOARD_H - TARGET_H - margin),
            )
        })
        .collect()
}

#[component]
pub fn MagnetDemo() -> Element {
    rsx! {
        MagnetBoard {
            smoothed: false,
            title: "Magnet",
            hint: "Buttons pull toward the pointer within 200px",
        }
    }
}

#[component]
pub fn SmoothMagnetDemo() -> Element {
    rsx! {
        MagnetBoard {
            smoothed: true,
            title: "Smoothed magnet",
            hint: "Every move is tweened with power2.out",
        }
    }
}

#[component]
fn MagnetBoard(smoothed: bool, title: String, hint: String) -> Element {
    let slot: Slot = use_hook(|| Rc::new(RefCell::new(None)));
    let mut layout = use_signal(|| random_layout(4));
    let mut error = use_signal(|| None::<String>);
    let mut bound = use_signal(|| 0usize);

    // Bind after the first render, re-resolve whenever the target count changes
    let effect_slot = slot.clone();
    use_effect(move || {
        let count = layout.read().len();
        let mut current = effect_slot.borrow_mut();
        let result = match current.as_ref() {
            Some(magnet) => magnet.refresh(),
            None => {
                let selector = format!(".{TARGET_CLASS}");
                let made = if smoothed {
                    web::make_magnet_smoothed(&selector, MagnetOptions::smoothed(), None)
                } else {
                    web::make_magnet(&selector, MagnetOptions::default(), None)
                };
                made.map(|magnet| {
                    let len = magnet.len();
                    *current = Some(magnet);
                    len
                })
            }
        };
        match result {
            Ok(len) => {
                log::debug!("{count} targets rendered, {len} bound");
                bound.set(len);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    });

    let on_drop = slot.clone();
    use_drop(move || {
        if let Some(magnet) = on_drop.borrow_mut().take() {
            _ = magnet.stop();
        }
    });

    let targets = layout.read().clone();

    rsx! {
        div {
            style: PAGE_STYLE,
            DemoHeader { title, hint }
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 16px;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let count = layout.read().len();
                        layout.set(random_layout(count));
                    },
                    "Shuffle"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let count = layout.read().len() + 1;
                        layout.set(random_layout(count));
                    },
                    "Add target"
                }
                span {
                    id: "bound",
                    style: "color: #22c55e; font-size: 14px; font-family: monospace;",
                    "bound: {bound}"
                }
            }
            if let Some(message) = error() {
                p { style: "color: #ef4444; font-size: 13px;", "{message}" }
            }
            div {
                id: "viewport",
                style: "width: {BOARD_W}px; height: {BOARD_H}px; background: #1a1a2e; position: relative; overflow: hidden; border-radius: 10px;",
                for (i, (x, y)) in targets.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: TARGET_CLASS,
                        style: "position: absolute; left: {x}px; top: {y}px; width: {TARGET_W}px; height: {TARGET_H}px; display: flex; align-items: center; justify-content: center; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; border-radius: 8px; font-size: 14px; font-weight: 600; user-select: none;",
                        {format!("Target {}", i + 1)}
                    }
                }
            }
        }
    }
}
