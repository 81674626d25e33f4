use watchdog_dashboard::App;

fn main() {
    console_error_panic_hook::set_once();
    // tracing events reach the console through its `log` bridge.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
