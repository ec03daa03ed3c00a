/// Render bytes as comma-separated C hex literals (`0x3c,0x21,0x3e`)
///
/// Each byte keeps its natural width (`5` renders as `0x5`, not `0x05`).
/// Empty input renders an empty string, which emits a zero-length array
/// initializer. Lossless: parsing the literals back reproduces the exact
/// byte sequence.
pub fn hex_byte_literals(bytes: &[u8]) -> String {
    let literals: Vec<String> = bytes.iter().map(|b| format!("{:#x}", b)).collect();
    literals.join(",")
}
