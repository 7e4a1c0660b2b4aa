//! Runtime configuration
//!
//! Every option can be given on the command line or through the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Clone, clap::Parser)]
#[command(author, version, about = "In-memory shopping list served over REST and MCP")]
pub struct Config {
    /// Address to bind
    #[clap(long, env = "SHOPPING_LIST_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[clap(long, short, env = "SHOPPING_LIST_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter, e.g. `info` or `shopping_list_rust=debug,tower_http=info`
    #[clap(long, env = "SHOPPING_LIST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
