use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "geodist", about = "Great-circle route distance service")]
pub struct Config {
    /// Address to bind to
    #[arg(long, value_name = "addr", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,
    /// Port to listen on
    #[arg(short, long, value_name = "port", default_value_t = 8080)]
    pub port: u16,
    /// Blocking worker threads for calculations (0 computes on the request task)
    #[arg(short, long, value_name = "n", default_value_t = 4)]
    pub workers: usize,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn log(&self) {
        tracing::info!(
            host = %self.host,
            port = self.port,
            workers = self.workers,
            "configuration loaded"
        );
    }
}
