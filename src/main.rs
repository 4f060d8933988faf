//! Client entry point: installs the panic hook, wires console logging, and
//! mounts the root component.

use wheel_of_choices::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
