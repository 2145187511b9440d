mod demo;

use dioxus::prelude::*;
use demo::{FollowerDemo, Landing, MagnetDemo, SmoothMagnetDemo};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/follower")]
    FollowerDemo {},
    #[route("/magnet")]
    MagnetDemo {},
    #[route("/magnet-smoothed")]
    SmoothMagnetDemo {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    cursor_fx::web::init_logging(log::Level::Debug);
    dioxus::launch(App);
}
