use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use crate::byte_array::render_byte_array;
use crate::credential::{CredentialBundle, CredentialKind};
use crate::string_literal::render_string_literal;

const CREDENTIALS_PREAMBLE: &str = r"/*
 * AWS IoT Core Credentials
 * Auto-generated - DO NOT EDIT MANUALLY
 *
 * SECURITY WARNING: This file contains sensitive cryptographic material.
 * Ensure this file is:
 * 1. Never committed to version control
 * 2. Protected with appropriate file system permissions
 * 3. Only included in secure build environments
 */

#ifndef AWS_IOT_CREDENTIALS_H
#define AWS_IOT_CREDENTIALS_H

#include <stddef.h>

";

const CERTS_PREAMBLE: &str = r"/* Auto-generated AWS IoT certificates */
/* SPDX-License-Identifier: Apache-2.0 */

#ifndef AWS_IOT_CERTS_H_
#define AWS_IOT_CERTS_H_

";

/// Compose the byte-array credentials header: preamble, one byte array
/// per readable slot under its comment header, and the
/// `load_aws_iot_credentials` helper. Missing slots are warned about and
/// skipped; they never fail the composition.
pub fn credentials_header(bundle: &CredentialBundle) -> String {
    let mut out = String::from(CREDENTIALS_PREAMBLE);

    for kind in CredentialKind::ALL {
        let _ = writeln!(out, "/* {} */", kind.slot_comment());
        if let Some(pem) = read_slot(bundle, kind) {
            out.push_str(&render_byte_array(kind.byte_array_name(), &pem));
        }
        out.push('\n');
    }

    out.push_str(&load_helper());
    out.push_str("\n#endif /* AWS_IOT_CREDENTIALS_H */\n");
    out
}

/// Compose the string-literal certs header: one concatenated-literal
/// declaration per readable slot, no helper function.
pub fn certs_header(bundle: &CredentialBundle) -> String {
    let mut out = String::from(CERTS_PREAMBLE);

    for kind in CredentialKind::ALL {
        let _ = writeln!(out, "/* {} */", kind.slot_comment());
        if let Some(pem) = read_slot(bundle, kind) {
            out.push_str(&render_string_literal(kind.string_literal_name(), &pem));
        }
    }

    out.push_str("#endif /* AWS_IOT_CERTS_H_ */\n");
    out
}

pub fn write_credentials_header(bundle: &CredentialBundle, output: &Path) -> Result<()> {
    fs::write(output, credentials_header(bundle))
        .with_context(|| format!("failed to write {}", output.display()))
}

pub fn write_certs_header(bundle: &CredentialBundle, output: &Path) -> Result<()> {
    fs::write(output, certs_header(bundle))
        .with_context(|| format!("failed to write {}", output.display()))
}

fn read_slot(bundle: &CredentialBundle, kind: CredentialKind) -> Option<String> {
    let Some(path) = bundle.path(kind) else {
        warn!("{} not provided, skipping", kind.description());
        return None;
    };
    match fs::read_to_string(path) {
        Ok(pem) => Some(pem),
        Err(e) => {
            warn!("{} not found: {} ({})", kind.description(), path.display(), e);
            None
        }
    }
}

/// The firmware-side loader. `tls_credential_add` and the
/// `TLS_CREDENTIAL_*` enumerators are an assumed external contract;
/// registration short-circuits on the first failing call.
fn load_helper() -> String {
    let mut out = String::from(
        "/* Helper function to load credentials into TLS */\n\
         static inline int load_aws_iot_credentials(int sec_tag)\n\
         {\n    int err;\n\n",
    );

    for kind in CredentialKind::ALL {
        let name = kind.byte_array_name();
        let _ = writeln!(out, "    /* Load {} */", kind.description());
        let _ = writeln!(
            out,
            "    err = tls_credential_add(sec_tag, {},\n                             {}, {}_len);",
            kind.tls_credential_enum(),
            name,
            name
        );
        out.push_str("    if (err < 0) {\n        return err;\n    }\n\n");
    }

    out.push_str("    return 0;\n}\n");
    out
}
