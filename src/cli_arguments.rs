use clap::{Parser, command};

use crate::log_writer::LogDestination;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, env = "PORT", default_value_t = 8888,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,

    #[arg(short, long, env = "LISTEN_IP", default_value = "localhost")]
    pub listen_ip: String,

    /// One of stdout, stderr, DISCARD or an append-mode file path.
    #[arg(short = 'f', long, env = "LOG_FILE", default_value = "stderr")]
    pub log_file: LogDestination,
}
