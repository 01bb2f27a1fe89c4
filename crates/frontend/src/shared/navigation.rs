/// Full page navigation. The server owns the session, so every page is a
/// fresh document load rather than a client-side route change.
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("navigate_to({}): no window", path);
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("navigate_to({}) failed: {:?}", path, e);
    }
}
