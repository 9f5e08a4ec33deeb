//! Page Configuration
//!
//! Reads an optional JSON override from
//! `<meta name="roster-config" content="{...}">` in the host page.

use roster_core::{RosterConfig, RosterResult};

const CONFIG_META_SELECTOR: &str = r#"meta[name="roster-config"]"#;

fn meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(CONFIG_META_SELECTOR).ok().flatten()?;
    meta.get_attribute("content")
}

/// Page config, or the parse error of a present but invalid override
pub fn load_config() -> RosterResult<RosterConfig> {
    match meta_content() {
        Some(raw) => RosterConfig::from_json(&raw),
        None => Ok(RosterConfig::default()),
    }
}
