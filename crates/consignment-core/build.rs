use std::env;
use std::path::PathBuf;

/// Builds the gRPC client and server code for the `consignment.proto`
/// definition using `tonic-prost-build`.
///
/// The generated module contains the `Consignment`, `Container`, `Response`
/// and `GetRequest` messages together with the `ShippingService` server trait
/// and client. A file descriptor set is written next to the generated code so
/// the server can expose it through gRPC reflection.
///
/// # Files and Paths
///
/// - Proto file: `proto/consignment.proto`
/// - Includes: `proto/`
///
/// # Output
///
/// ```rust
/// pub mod proto {
///     tonic::include_proto!("consignment");
/// }
/// ```
///
/// # Panics
///
/// Panics if `OUT_DIR` is unset or code generation fails.
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("consignment_descriptor.bin");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/consignment.proto"], &["proto"])
        .unwrap();
}
