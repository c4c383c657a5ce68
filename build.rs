use chrono::Datelike;

fn main() {
    // Footer copyright year
    let build_year = chrono::Utc::now().year();

    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);
    println!("cargo:rerun-if-changed=build.rs");
}
