use once_cell::sync::OnceCell;
use wasm_bindgen::JsCast;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Deployment settings come from meta tags in the host document, so
    /// the same build can point at different backends.
    fn from_document() -> Self {
        Self {
            api_url: meta_content("ems-api-url").unwrap_or_else(|| "/api".to_string()),
        }
    }
}

/// Resolves the configuration once, at startup.
pub fn init() {
    let _ = CONFIG.set(Config::from_document());
}

/// Base URL for API requests. Falls back to `/api` before `init` runs.
pub fn api_url() -> String {
    CONFIG
        .get()
        .map(|c| c.api_url.clone())
        .unwrap_or_else(|| "/api".to_string())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;
    let content = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?.content();
    let content = content.trim();
    (!content.is_empty()).then(|| content.to_string())
}
