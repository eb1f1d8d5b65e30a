//! Browser entry point: mounts the cluster canvas app.

// dependencies are consumed by the library target
#![allow(unused_crate_dependencies)]

use cluster_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
