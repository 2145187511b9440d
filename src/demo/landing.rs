use dioxus::prelude::*;
use crate::Route;

struct EffectInfo {
    name: &'static str,
    desc: &'static str,
    route: Route,
}

const EFFECTS: &[EffectInfo] = &[
    EffectInfo { name: "Follower",        desc: "A dot that trails the pointer with a power3 ease",          route: Route::FollowerDemo {} },
    EffectInfo { name: "Magnet",          desc: "Buttons lean toward the pointer via inline transforms",      route: Route::MagnetDemo {} },
    EffectInfo { name: "Smoothed magnet", desc: "Same pull, every move tweened on animation frames",         route: Route::SmoothMagnetDemo {} },
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "cursor-fx"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Pointer-reactive effects: a follower that tracks the cursor and magnets that pull nearby elements toward it."
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px;",
                for effect in EFFECTS {
                    Link {
                        to: effect.route.clone(),
                        style: "display: block; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; text-decoration: none;",
                        h3 {
                            style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                            "{effect.name}"
                        }
                        p {
                            style: "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;",
                            "{effect.desc}"
                        }
                    }
                }
            }
        }
    }
}
