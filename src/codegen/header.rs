use super::bytes::hex_byte_literals;
use crate::resource::{ResourceTable, Role, VirtualFile};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// The PROGMEM_File record type consumed by the firmware build
const STRUCT_TYPEDEF: &str = "\n\
typedef struct {\n\
\tconst char* name;\n\
\tconst char* mime;\n\
\tconst char* data;\n\
\tsize_t size;\n\
} PROGMEM_File;\n\n\n";

/// Linear-scan lookup by virtual path, first match wins
const LOOKUP_FN: &str = "\n\
const PROGMEM_File* getPROGMEM_File(const char* filename)\n\
{\n\
\tconst PROGMEM_File* res = nullptr;\n\
\tfor (size_t i = 0; i < PROGMEM_FILES_COUNT; i++)\n\
\t{\n\
\t\tif (String(progmem_files[i].name).equals(filename))\n\
\t\t{\n\
\t\t\tres = &progmem_files[i];\n\
\t\t\tbreak;\n\
\t\t}\n\
\t}\n\
\treturn res;\n\
}\n";

/// Render the complete header artifact for a resource table
///
/// Fixed section order: struct typedef, per-file constants, the
/// progmem_files array, the derived count, the lookup function.
pub fn render_header(table: &ResourceTable) -> String {
    let mut out = String::new();
    out.push_str(STRUCT_TYPEDEF);

    for file in table.iter() {
        out.push_str(&render_declarations(file));
        out.push('\n');
    }

    out.push_str(&render_table(table));
    out.push_str(LOOKUP_FN);
    out
}

/// Render and write the artifact, overwriting any existing file
///
/// Returns the number of bytes written.
pub fn write_header(path: &Path, table: &ResourceTable) -> Result<usize> {
    let text = render_header(table);
    fs::write(path, &text)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(text.len())
}

/// The three PROGMEM constants declared for one file
fn render_declarations(file: &VirtualFile) -> String {
    format!(
        "{}\n{}\n{}\n",
        raw_string_constant(&file.symbol(Role::Name), &file.path),
        raw_string_constant(&file.symbol(Role::Mime), &file.mime),
        data_constant(&file.symbol(Role::Data), &file.bytes),
    )
}

/// Emit a string constant as a C++ raw literal, so embedded quotes and
/// specials need no escaping
fn raw_string_constant(symbol: &str, value: &str) -> String {
    format!(
        r#"const char {}[] PROGMEM = R"rawliteral({})rawliteral";"#,
        symbol, value
    )
}

fn data_constant(symbol: &str, bytes: &[u8]) -> String {
    format!(
        "const char {}[] PROGMEM = {{{}}};",
        symbol,
        hex_byte_literals(bytes)
    )
}

/// The progmem_files array plus its sizeof-derived count
fn render_table(table: &ResourceTable) -> String {
    let entries: Vec<String> = table.iter().map(render_entry).collect();

    format!(
        "\nconst PROGMEM_File progmem_files[] PROGMEM = {{\n{}\n}};\n\n\
         const size_t PROGMEM_FILES_COUNT PROGMEM = sizeof(progmem_files) / sizeof(PROGMEM_File);\n",
        entries.join(",\n")
    )
}

/// One struct literal referencing a file's three constants
///
/// `size` is derived from the data array's length at compile time, not
/// stored redundantly.
fn render_entry(file: &VirtualFile) -> String {
    let data = file.symbol(Role::Data);

    format!(
        "\t{{\n\t\tname: {},\n\t\tmime: {},\n\t\tdata: {},\n\t\tsize: sizeof({}),\n\t}}",
        file.symbol(Role::Name),
        file.symbol(Role::Mime),
        data,
        data
    )
}
