use rustc_version::{version, version_meta, Channel};

fn main() {
    let ver = version().expect("unable to query rustc version");
    assert!(ver.major >= 1);

    // Benchmarks in `prox` use the unstable `test` crate
    println!("cargo:rustc-check-cfg=cfg(rustc_nightly)");
    println!("cargo:rustc-check-cfg=cfg(rustc_beta)");

    match version_meta().expect("unable to query rustc channel").channel {
        Channel::Nightly => {
            println!("cargo:rustc-cfg=rustc_nightly");
        }
        Channel::Beta => {
            println!("cargo:rustc-cfg=rustc_beta");
        }
        _ => {}
    }
}
