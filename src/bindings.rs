//! JavaScript exports
//!
//! Mirrors the call shapes script authors expect: `mouseFollower(parent?,
//! element?)`, `makeMagnet(selector, distance?, strength?, duration?,
//! element?)` and `makeMagnetGSAP(selector, options?, element?)`. Every
//! call returns a handle with `stop()`.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::FxError;
use crate::follower::Follower;
use crate::magnet::{Magnet, MagnetOptions};
use crate::web::{self, WebEnvironment};

fn to_js(err: FxError) -> JsError {
    JsError::new(&err.to_string())
}

#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    web::init_logging(log::Level::Info);
}

#[wasm_bindgen]
pub struct FollowerHandle {
    inner: Follower<WebEnvironment>,
}

#[wasm_bindgen]
impl FollowerHandle {
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.inner.element().clone()
    }

    #[wasm_bindgen(getter, js_name = isStopped)]
    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }

    pub fn stop(&self) -> Result<(), JsError> {
        self.inner.stop().map_err(to_js)
    }
}

#[wasm_bindgen(js_name = mouseFollower)]
pub fn mouse_follower(
    parent: Option<HtmlElement>,
    custom_follower: Option<HtmlElement>,
) -> Result<FollowerHandle, JsError> {
    let inner = web::mouse_follower(parent, custom_follower).map_err(to_js)?;
    Ok(FollowerHandle { inner })
}

#[wasm_bindgen]
pub struct MagnetHandle {
    inner: Magnet<WebEnvironment>,
}

#[wasm_bindgen]
impl MagnetHandle {
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter, js_name = isStopped)]
    pub fn is_stopped(&self) -> bool {
        self.inner.is_stopped()
    }

    /// Re-query the selector; returns the new target count.
    pub fn refresh(&self) -> Result<usize, JsError> {
        self.inner.refresh().map_err(to_js)
    }

    pub fn stop(&self) -> Result<(), JsError> {
        self.inner.stop().map_err(to_js)
    }
}

#[wasm_bindgen(js_name = makeMagnet)]
pub fn make_magnet(
    selector: &str,
    distance: Option<f64>,
    strength: Option<f64>,
    animation_duration: Option<f64>,
    custom_element: Option<HtmlElement>,
) -> Result<MagnetHandle, JsError> {
    let defaults = MagnetOptions::default();
    let options = MagnetOptions {
        distance: distance.unwrap_or(defaults.distance),
        strength: strength.unwrap_or(defaults.strength),
        animation_duration: animation_duration.unwrap_or(defaults.animation_duration),
    };
    let inner = web::make_magnet(selector, options, custom_element).map_err(to_js)?;
    Ok(MagnetHandle { inner })
}

#[wasm_bindgen(js_name = makeMagnetGSAP)]
pub fn make_magnet_smoothed(
    selector: &str,
    options: JsValue,
    custom_element: Option<HtmlElement>,
) -> Result<MagnetHandle, JsError> {
    let options = parse_options(&options).map_err(to_js)?;
    let inner = web::make_magnet_smoothed(selector, options, custom_element).map_err(to_js)?;
    Ok(MagnetHandle { inner })
}

fn parse_options(value: &JsValue) -> Result<MagnetOptions, FxError> {
    let base = MagnetOptions::smoothed();
    if value.is_undefined() || value.is_null() {
        return Ok(base);
    }
    if !value.is_object() {
        let kind = value.js_typeof().as_string().unwrap_or_default();
        return Err(FxError::OptionsShape(kind));
    }
    let json: String = js_sys::JSON::stringify(value)
        .map_err(|e| FxError::dom("JSON.stringify", &e))?
        .into();
    MagnetOptions::from_json_over(&json, base)
}
