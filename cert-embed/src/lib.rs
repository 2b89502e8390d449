//! Converts PEM certificates and keys into C source that can be compiled
//! into firmware, either as null-terminated byte arrays (with companion
//! length constants and a `tls_credential_add` helper) or as concatenated
//! string literals.

mod byte_array;
mod credential;
mod header;
mod string_literal;

pub use byte_array::render_byte_array;
pub use credential::{CredentialBundle, CredentialKind};
pub use header::{
    certs_header, credentials_header, write_certs_header, write_credentials_header,
};
pub use string_literal::render_string_literal;
