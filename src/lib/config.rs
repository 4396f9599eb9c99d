use crate::{Cli, ConfigError::InvalidValue, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub context: Option<String>,
    pub namespace: Option<String>,
    pub limit: usize,
}

impl Config {
    pub fn new(context: Option<String>, namespace: Option<String>, limit: usize) -> Result<Self> {
        if limit == 0 {
            return Err(InvalidValue("--limit must be at least 1".to_string()).into());
        }

        Ok(Self {
            context,
            namespace,
            limit,
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::new(cli.context.clone(), cli.namespace.clone(), cli.limit)
    }
}
