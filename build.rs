use rustc_version::{version, version_meta, Channel};

// benches use the unstable `test` crate, so they only build on nightly
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(rustc_nightly)");

    let ver = version().unwrap();
    assert!(ver.major >= 1);

    if let Channel::Nightly = version_meta().unwrap().channel {
        println!("cargo:rustc-cfg=rustc_nightly");
    }
}
