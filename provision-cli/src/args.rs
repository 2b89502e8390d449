use std::fmt::Display;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "Provision Certs")]
#[command(bin_name = "provision-cli")]
#[command(about = "provision AWS IoT certificates to a device")]
pub struct Cli {
    #[arg(help = "device identifier (e.g. kargopod-001)")]
    pub device_id: String,

    #[arg(help = "directory containing the AWS IoT certificates")]
    pub cert_dir: PathBuf,

    #[arg(long, help = "security tag number, defaults to the configured value")]
    pub sec_tag: Option<u32>,

    #[arg(
        long,
        value_enum,
        help = "provisioning strategy, defaults to the configured value"
    )]
    pub strategy: Option<ProvisionStrategy>,
}

/// How the verified credentials reach the device: written into the modem
/// through an external programming tool, or baked into a C header for
/// firmware that carries its certificates in flash.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProvisionStrategy {
    Nrfjprog,
    Header,
}

impl Display for ProvisionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionStrategy::Nrfjprog => write!(f, "nrfjprog"),
            ProvisionStrategy::Header => write!(f, "header"),
        }
    }
}
