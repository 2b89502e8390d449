use std::fmt::Write as _;

/// Render PEM text as a null-terminated C byte array plus a companion
/// length constant.
///
/// Every input line becomes one row of two-digit lowercase hex literals
/// followed by an explicit `0x0a` newline byte; a blank line emits just
/// the newline byte. Non-ASCII characters expand to their UTF-8 bytes.
/// The length constant is derived from `sizeof` so it always matches the
/// array, terminator included.
pub fn render_byte_array(name: &str, pem: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "static const unsigned char {}[] = {{", name);

    for line in pem.lines() {
        for byte in line.bytes() {
            let _ = write!(out, "0x{:02x}, ", byte);
        }
        out.push_str("0x0a, \n");
    }

    out.push_str("0x00  /* null terminator */\n};\n\n");
    let _ = writeln!(out, "static const size_t {}_len = sizeof({});", name, name);
    out
}
