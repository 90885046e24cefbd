//! HTTP adapter factory
//!
//! A [`Framework`] selector is mapped to a concrete adapter by
//! [`make_adapter`]. Callers only see the [`HttpAdapter`] capability.

use crate::error::CartError;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Express,
    Fastify,
}

impl Framework {
    pub const ALL: [Framework; 2] = [Framework::Express, Framework::Fastify];
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framework::Express => f.write_str("Express"),
            Framework::Fastify => f.write_str("Fastify"),
        }
    }
}

impl FromStr for Framework {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Framework::Express),
            "fastify" => Ok(Framework::Fastify),
            _ => Err(CartError::UnknownFramework(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Something that can serve every [`HttpMethod`].
pub trait HttpAdapter: Send + Sync {
    fn framework(&self) -> Framework;

    /// Handles `method` and describes what was done.
    fn handle(&self, method: HttpMethod) -> String {
        format!("{} using {}", method, self.framework())
    }
}

struct ExpressAdapter;

impl HttpAdapter for ExpressAdapter {
    fn framework(&self) -> Framework {
        Framework::Express
    }
}

struct FastifyAdapter;

impl HttpAdapter for FastifyAdapter {
    fn framework(&self) -> Framework {
        Framework::Fastify
    }
}

/// Builds the adapter for `framework`.
pub fn make_adapter(framework: Framework) -> Box<dyn HttpAdapter> {
    tracing::debug!("Building {} adapter", framework);
    match framework {
        Framework::Express => Box::new(ExpressAdapter),
        Framework::Fastify => Box::new(FastifyAdapter),
    }
}

/// Runs every method against `adapter`, in [`HttpMethod::ALL`] order.
pub fn exercise_adapter(adapter: &dyn HttpAdapter) -> Vec<String> {
    HttpMethod::ALL
        .iter()
        .map(|&method| adapter.handle(method))
        .collect()
}
