use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = crate_dir.join("src/generated");
    let proto_file = crate_dir.join("proto/media.proto");

    println!("cargo:rerun-if-changed={}", proto_file.display());

    // Generated code is committed; only regenerate when it has been removed.
    if out_dir.join("media.v1.rs").exists() {
        return Ok(());
    }

    if env::var("PROTOC").is_err() {
        println!("cargo:warning=src/generated/media.v1.rs is missing and PROTOC is not set");
        println!("cargo:warning=Install protoc and set PROTOC to regenerate the gRPC bindings");
        return Ok(());
    }

    std::fs::create_dir_all(&out_dir)?;
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .out_dir(&out_dir)
        .compile_protos(&[proto_file], &[crate_dir.join("proto")])?;

    Ok(())
}
