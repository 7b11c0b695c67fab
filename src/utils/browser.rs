use super::urlify;

pub fn open_url(url: &str) {
    if webbrowser::open(url).is_ok() {
        log::info!("Opening browser to: {}", urlify(url));
    } else {
        log::info!("Could not open a web browser.");
        log::info!("Continue the checkout at {}", urlify(url));
    }
}
