use web_sys::window;
use hangman_shared::constants::API_PROXY_PATH;

pub fn get_origin() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            // Keep the port so invite links work from other machines on the LAN
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, host);
        }
    }

    // Default to the local proxy for development
    "http://127.0.0.1:5000".to_string()
}

pub fn get_api_base_url() -> String {
    format!("{}{}", get_origin(), API_PROXY_PATH)
}
