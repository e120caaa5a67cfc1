use anyhow::bail;
use clap::{Parser, ValueEnum};
use core::time::Duration;

/// Backing store used by the shipping service.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// A `Vec` behind a read-write lock, shared by every request.
    Memory,
    /// A single writer task fed through a bounded command queue.
    Queued,
}

/// Runtime configuration for the `consignment-service` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file is loaded first if present), with defaults suitable for local
/// development.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "consignment-service",
    version,
    about = "A gRPC service that records and lists shipment consignments"
)]
pub struct CliArgs {
    /// Address to listen on (TCP or Unix socket path; use --uds for Unix
    /// socket).
    ///
    /// Example: "0.0.0.0:50051" or "/tmp/consignment.sock"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:50051"))]
    pub server_addr: String,

    /// Listen on a Unix socket instead of TCP. If set, `SERVER_ADDR` must be a
    /// file path.
    #[arg(short, long, default_value_t = false)]
    pub uds: bool,

    /// Name the service announces itself under in logs and telemetry.
    ///
    /// Environment variable: `SERVICE_NAME`
    #[arg(long, env = "SERVICE_NAME", default_value_t = String::from("go.micro.srv.consignment"))]
    pub service_name: String,

    /// Which consignment store backs the service.
    ///
    /// Environment variable: `STORE`
    #[arg(long, env = "STORE", value_enum, default_value_t = StoreKind::Memory)]
    pub store: StoreKind,

    /// Capacity of the command queue in front of the queued store.
    ///
    /// Callers wait for a free slot once this many writes are pending. Only
    /// used with `--store queued`.
    ///
    /// Environment variable: `STORE_BUFFER_SIZE`
    #[arg(long, env = "STORE_BUFFER_SIZE", default_value_t = 1024)]
    pub store_buffer_size: usize,

    /// Seconds to wait for the store to acknowledge shutdown.
    ///
    /// Environment variable: `SHUTDOWN_TIMEOUT`
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 3)]
    pub shutdown_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub uds: bool,
    pub service_name: String,
    pub store: StoreKind,
    pub store_buffer_size: usize,
    pub shutdown_timeout: Duration,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.store_buffer_size == 0 {
            bail!("STORE_BUFFER_SIZE must be greater than 0");
        }

        if args.shutdown_timeout == 0 {
            bail!("SHUTDOWN_TIMEOUT must be greater than 0");
        }

        if args.service_name.trim().is_empty() {
            bail!("SERVICE_NAME must not be empty");
        }

        Ok(Self {
            server_addr: args.server_addr,
            uds: args.uds,
            service_name: args.service_name,
            store: args.store,
            store_buffer_size: args.store_buffer_size,
            shutdown_timeout: Duration::from_secs(args.shutdown_timeout),
        })
    }
}
