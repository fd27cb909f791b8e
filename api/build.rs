use std::{env, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use a vendored protoc so builds don't depend on a system install.
    env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let well_known_include = protoc_bin_vendored::include_path()?;
    tonic_build::configure()
        .file_descriptor_set_path(out_dir.join("charity_descriptor.bin"))
        .compile_protos(
            &["proto/charity/donation.proto"],
            &[PathBuf::from("proto"), well_known_include],
        )?;

    println!("cargo:rerun-if-changed=proto");
    Ok(())
}
