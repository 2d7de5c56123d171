use std::fs;
use std::path::Path;

const FALLBACK_INDEX: &str = "<!doctype html><html><body><p>Frontend not built. Run `trunk build` in ../frontend.</p></body></html>";

fn main() {
    let out_dir = Path::new("static/dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    } else if !out_dir.join("index.html").exists() {
        fs::create_dir_all(out_dir).unwrap();
        fs::write(out_dir.join("index.html"), FALLBACK_INDEX).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
