use std::path::PathBuf;

use anyhow::Result;
use cert_embed::{CredentialBundle, write_credentials_header};
use clap::Parser;
use log::LevelFilter;
use log::info;

#[derive(Parser)]
#[command(name = "Embed Certs")]
#[command(bin_name = "embed-certs-cli")]
#[command(about = "convert AWS IoT PEM credentials into an embeddable C header")]
struct Cli {
    #[arg(long, help = "path to the AWS IoT root CA certificate (AmazonRootCA1.pem)")]
    ca_cert: PathBuf,

    #[arg(long, help = "path to the device certificate")]
    device_cert: PathBuf,

    #[arg(long, help = "path to the device private key")]
    device_key: PathBuf,

    #[arg(long, default_value = "src/aws_iot_credentials.h", help = "output C header path")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Info)
        .try_init();
    let args = Cli::parse();

    let bundle = CredentialBundle {
        ca_cert: Some(args.ca_cert),
        device_cert: Some(args.device_cert),
        device_key: Some(args.device_key),
    };
    write_credentials_header(&bundle, &args.output)?;

    info!("Credentials header generated: {}", args.output.display());
    info!("Next steps:");
    info!("1. Include this header in your main.c: #include \"aws_iot_credentials.h\"");
    info!("2. Call load_aws_iot_credentials(CONFIG_AWS_IOT_SEC_TAG) before MQTT connect");
    info!("3. Update prj.conf with your AWS IoT endpoint and client ID");

    Ok(())
}
