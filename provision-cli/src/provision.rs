use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow, bail};
use cert_embed::{CredentialBundle, CredentialKind, write_certs_header};
use log::{error, info};

use crate::args::{Cli, ProvisionStrategy};
use crate::config::ProvisionConfig;
use crate::pipeline::{ProvisionStep, run_steps};

pub fn provision(args: Cli) -> Result<()> {
    let config = ProvisionConfig::load()?;
    let sec_tag = args.sec_tag.unwrap_or(config.sec_tag);
    let strategy = args.strategy.unwrap_or(config.strategy);

    info!("Provisioning certificates for device: {}", args.device_id);
    info!("Certificate directory: {}", args.cert_dir.display());
    info!("Security tag: {}", sec_tag);
    info!("Strategy: {}", strategy);

    let bundle = CredentialBundle::for_device(&args.cert_dir, &args.device_id);

    match strategy {
        ProvisionStrategy::Nrfjprog => {
            let steps = plan_nrfjprog_steps(&bundle, sec_tag)?;
            info!("Provisioning to nRF9160 modem...");
            run_steps(&steps)?;
            info!("Certificates provisioned successfully!");
        }
        ProvisionStrategy::Header => {
            verify_files(&bundle)?;
            info!("Generating certificate header...");
            let header_path = generate_header(&bundle, &args.cert_dir)?;
            info!("Certificate header generated: {}", header_path.display());
            info!("Next steps:");
            info!("1. Copy aws_iot_certs.h to your project's src/ directory");
            info!("2. Include it in your MQTT manager code");
            info!("3. Register certificates with tls_credential_add()");
        }
    }

    Ok(())
}

/// All-or-nothing presence check: every missing file is reported with its
/// path, and a single absence fails the whole run before any step runs.
fn verify_files(bundle: &CredentialBundle) -> Result<()> {
    let missing = bundle.missing_files();
    if !missing.is_empty() {
        for path in &missing {
            error!("Certificate file not found: {}", path.display());
        }
        let listed: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
        bail!("certificate file(s) not found: {}", listed.join(", "));
    }

    info!("Certificate files found:");
    for kind in CredentialKind::ALL {
        if let Some(path) = bundle.path(kind) {
            info!("  {}: {}", kind.description(), path.display());
        }
    }

    Ok(())
}

/// One `nrfjprog` invocation per credential, CA first, then device
/// certificate, then private key, each tagged with the security tag and
/// its credential type code.
fn plan_nrfjprog_steps(bundle: &CredentialBundle, sec_tag: u32) -> Result<Vec<ProvisionStep>> {
    verify_files(bundle)?;

    let mut steps = Vec::new();
    for kind in CredentialKind::ALL {
        let path = bundle
            .path(kind)
            .ok_or_else(|| anyhow!("no path for {}", kind.description()))?;

        steps.push(ProvisionStep {
            name: format!("write {}", kind.description()),
            program: "nrfjprog".into(),
            args: vec![
                "--program".into(),
                path.display().to_string(),
                "--sectag".into(),
                sec_tag.to_string(),
                "--credtype".into(),
                kind.cred_type().to_string(),
            ],
        });
    }

    Ok(steps)
}

fn generate_header(bundle: &CredentialBundle, cert_dir: &Path) -> Result<PathBuf> {
    let header_path = cert_dir.join("aws_iot_certs.h");
    write_certs_header(bundle, &header_path)?;
    Ok(header_path)
}
