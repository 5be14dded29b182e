use client::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        // A second init can only happen on double-mount; logging still works.
    }
    leptos::mount::mount_to_body(App);
}
