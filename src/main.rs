#[cfg(target_arch = "wasm32")]
fn main() {
    ems_frontend::run();
}

// The binary only exists for Trunk; nothing runs on the host target.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
