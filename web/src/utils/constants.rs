//! Application constants

pub const APP_NAME: &str = "Lumen";

/// `<script type="application/json">` element holding optional app config.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

/// Static loading screen rendered by `index.html` until WASM boots.
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
