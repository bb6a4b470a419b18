use clap::{ArgAction, Parser};

use crate::student::PageSettings;
use crate::student::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Parser, Clone)]
pub struct Config {
    #[clap(long, env, default_value_t = 8080)]
    pub port: u16,

    #[clap(long, env, default_value_t = true, action = ArgAction::Set)]
    pub swagger_enabled: bool,

    #[clap(long, env, default_value = "info")]
    pub log_level: String,

    #[clap(long, env, default_value = "sqlite://students.db?mode=rwc")]
    pub database_url: String,

    /// Insert the demo students on startup when they are missing
    #[clap(long, env, default_value_t = true, action = ArgAction::Set)]
    pub seed_on_startup: bool,

    #[clap(
        long,
        env,
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub default_page_size: u64,

    #[clap(
        long,
        env,
        default_value_t = MAX_PAGE_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_page_size: u64,
}

impl Config {
    pub fn page_settings(&self) -> anyhow::Result<PageSettings> {
        anyhow::ensure!(
            self.default_page_size <= self.max_page_size,
            "DEFAULT_PAGE_SIZE ({}) must not exceed MAX_PAGE_SIZE ({})",
            self.default_page_size,
            self.max_page_size
        );

        Ok(PageSettings {
            default_size: self.default_page_size,
            max_size: self.max_page_size,
        })
    }
}
