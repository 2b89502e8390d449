use std::path::{Path, PathBuf};

/// Role of one credential in an AWS IoT bundle.
///
/// Order matches the modem credential type codes:
/// 0 = CA certificate, 1 = device certificate, 2 = private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    CaCertificate,
    DeviceCertificate,
    PrivateKey,
}

impl CredentialKind {
    pub const ALL: [CredentialKind; 3] = [
        CredentialKind::CaCertificate,
        CredentialKind::DeviceCertificate,
        CredentialKind::PrivateKey,
    ];

    /// Credential type code expected by the secure storage API.
    pub fn cred_type(self) -> u8 {
        match self {
            CredentialKind::CaCertificate => 0,
            CredentialKind::DeviceCertificate => 1,
            CredentialKind::PrivateKey => 2,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CredentialKind::CaCertificate => "CA certificate",
            CredentialKind::DeviceCertificate => "device certificate",
            CredentialKind::PrivateKey => "device private key",
        }
    }

    /// C identifier used for this slot in byte-array headers.
    pub fn byte_array_name(self) -> &'static str {
        match self {
            CredentialKind::CaCertificate => "aws_iot_root_ca",
            CredentialKind::DeviceCertificate => "aws_iot_device_cert",
            CredentialKind::PrivateKey => "aws_iot_device_key",
        }
    }

    /// C identifier used for this slot in string-literal headers.
    pub fn string_literal_name(self) -> &'static str {
        match self {
            CredentialKind::CaCertificate => "aws_iot_ca_cert",
            CredentialKind::DeviceCertificate => "aws_iot_device_cert",
            CredentialKind::PrivateKey => "aws_iot_private_key",
        }
    }

    /// Enumerator of the firmware-side TLS credential API. Fixed external
    /// contract, not generated.
    pub fn tls_credential_enum(self) -> &'static str {
        match self {
            CredentialKind::CaCertificate => "TLS_CREDENTIAL_CA_CERTIFICATE",
            CredentialKind::DeviceCertificate => "TLS_CREDENTIAL_SERVER_CERTIFICATE",
            CredentialKind::PrivateKey => "TLS_CREDENTIAL_PRIVATE_KEY",
        }
    }

    pub fn slot_comment(self) -> &'static str {
        match self {
            CredentialKind::CaCertificate => "AWS IoT Root CA Certificate",
            CredentialKind::DeviceCertificate => "Device Certificate",
            CredentialKind::PrivateKey => "Device Private Key",
        }
    }
}

/// Up to three credential files making up one device's identity. Slots
/// left as `None` (or pointing at files that do not exist) are skipped
/// with a warning during header generation.
#[derive(Debug, Clone, Default)]
pub struct CredentialBundle {
    pub ca_cert: Option<PathBuf>,
    pub device_cert: Option<PathBuf>,
    pub device_key: Option<PathBuf>,
}

impl CredentialBundle {
    /// Expected file layout of a device's certificate directory, as
    /// downloaded from the AWS IoT console.
    pub fn for_device(cert_dir: &Path, device_id: &str) -> Self {
        Self {
            ca_cert: Some(cert_dir.join("AmazonRootCA1.pem")),
            device_cert: Some(cert_dir.join(format!("{}-certificate.pem.crt", device_id))),
            device_key: Some(cert_dir.join(format!("{}-private.pem.key", device_id))),
        }
    }

    pub fn path(&self, kind: CredentialKind) -> Option<&Path> {
        match kind {
            CredentialKind::CaCertificate => self.ca_cert.as_deref(),
            CredentialKind::DeviceCertificate => self.device_cert.as_deref(),
            CredentialKind::PrivateKey => self.device_key.as_deref(),
        }
    }

    /// Paths that are set but do not resolve to a file on disk.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        CredentialKind::ALL
            .iter()
            .filter_map(|&kind| self.path(kind))
            .filter(|path| !path.is_file())
            .map(Path::to_path_buf)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cred_type_codes_match_storage_api() {
        assert_eq!(CredentialKind::CaCertificate.cred_type(), 0);
        assert_eq!(CredentialKind::DeviceCertificate.cred_type(), 1);
        assert_eq!(CredentialKind::PrivateKey.cred_type(), 2);
    }

    #[test]
    fn for_device_uses_naming_convention() {
        let bundle = CredentialBundle::for_device(Path::new("/certs"), "kargopod-001");
        assert_eq!(
            bundle.ca_cert.as_deref(),
            Some(Path::new("/certs/AmazonRootCA1.pem"))
        );
        assert_eq!(
            bundle.device_cert.as_deref(),
            Some(Path::new("/certs/kargopod-001-certificate.pem.crt"))
        );
        assert_eq!(
            bundle.device_key.as_deref(),
            Some(Path::new("/certs/kargopod-001-private.pem.key"))
        );
    }

    #[test]
    fn missing_files_reports_every_absent_slot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AmazonRootCA1.pem"), "ca").unwrap();

        let bundle = CredentialBundle::for_device(dir.path(), "dev-1");
        let missing = bundle.missing_files();
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0], dir.path().join("dev-1-certificate.pem.crt"));
        assert_eq!(missing[1], dir.path().join("dev-1-private.pem.key"));
    }

    #[test]
    fn unset_slots_are_not_missing() {
        let bundle = CredentialBundle::default();
        assert!(bundle.missing_files().is_empty());
    }
}
