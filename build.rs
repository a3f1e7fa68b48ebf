use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const ARCHIVES: [&str; 2] = ["backend.tar", "frontend.tar"];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let images_dir = manifest_dir.join("assets").join("images");
    println!("cargo:rerun-if-changed={}", images_dir.display());

    for name in ARCHIVES {
        let src = images_dir.join(name);
        let dst = out_dir.join(name);
        if src.exists() {
            fs::copy(&src, &dst)
                .unwrap_or_else(|err| panic!("failed to copy {}: {err}", src.display()));
        } else {
            write_stub(&dst, name);
        }
    }
}

// Dev builds without the real image artifacts get an inert stub. Release
// packaging must place the `docker save` output in assets/images/ first.
fn write_stub(dst: &Path, name: &str) {
    let note = format!(
        "placeholder for {name}; run `docker save` and drop the real archive into assets/images/\n"
    );
    fs::write(dst, note).unwrap_or_else(|err| panic!("failed to write {}: {err}", dst.display()));
}
