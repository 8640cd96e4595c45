use std::io;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 8000;

/// Interface the server binds to.
pub const BIND_HOST: &str = "0.0.0.0";

/// Listener settings read at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Reads `PORT` from the environment.
    pub fn from_env() -> io::Result<Self> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn from_port_var(port: Option<&str>) -> io::Result<Self> {
        let port = match port.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse::<u16>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid PORT value {:?}: {}", value, e),
                )
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: BIND_HOST.to_string(),
            port,
        })
    }

    /// Socket address in `host:port` form.
    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
