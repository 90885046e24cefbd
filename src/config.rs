//! Command-line configuration

use crate::factory::Framework;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};

#[derive(Parser, Debug)]
#[command(name = "singleton-cart")]
#[command(author, version, about = "A process-wide shopping cart and an HTTP adapter factory", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the shared cart over REST and MCP
    Serve {
        /// Address to bind
        #[arg(long, env = "CART_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, short, env = "CART_PORT", default_value_t = 8000)]
        port: u16,
    },

    /// Run the shared cart scenario on the console
    Demo,

    /// Exercise the HTTP adapter factory
    Adapters {
        /// Only build this framework's adapter (express, fastify)
        #[arg(long)]
        framework: Option<Framework>,
    },
}

impl Args {
    /// The subcommand to run; `demo` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}

impl Command {
    /// Socket address for `serve`, if this is the `serve` command.
    pub fn bind_addr(&self) -> Option<SocketAddr> {
        match self {
            Command::Serve { host, port } => Some(SocketAddr::new(*host, *port)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_demo() {
        let args = Args::try_parse_from(["singleton-cart"]).unwrap();
        assert_eq!(args.command(), Command::Demo);
    }

    #[test]
    fn serve_parses_host_and_port() {
        let args =
            Args::try_parse_from(["singleton-cart", "serve", "--host", "127.0.0.1", "-p", "9000"])
                .unwrap();
        assert_eq!(
            args.command().bind_addr(),
            Some("127.0.0.1:9000".parse::<SocketAddr>().unwrap())
        );
    }

    #[test]
    fn adapters_parses_framework() {
        let args =
            Args::try_parse_from(["singleton-cart", "adapters", "--framework", "express"]).unwrap();
        assert_eq!(
            args.command(),
            Command::Adapters {
                framework: Some(Framework::Express)
            }
        );

        assert!(Args::try_parse_from(["singleton-cart", "adapters", "--framework", "koa"]).is_err());
    }
}
