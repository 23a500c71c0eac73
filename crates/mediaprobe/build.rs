fn main() {
    cc::Build::new()
        .file("src/c/mediainfo_wrapper.c")
        // The function table is filled through `void *` casts which pedantic warnings dislike.
        .warnings(false)
        .compile("mp_mediainfo_0_1_0");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os == "linux" || target_os == "android" {
        println!("cargo:rustc-link-lib=dl");
    }

    println!("cargo:rerun-if-changed=src/c");
}
