use std::error::Error;

use inireader::{IniErrorKind, IniReader};

fn main() -> Result<(), Box<dyn Error>> {
    // Create example INI content
    let ini_content = r#"
[General]
api_mode=false
api_access_token=password
default_url=
enable_insert=true
max_retries=3

[Proxy]
test=trojan,example.com,443 # inline comment
test2=vmess,example.org,8080

[General]
max_retries=5
"#;

    // Parse with the INI reader
    let reader = IniReader::parse(ini_content)?;

    // Get all section names
    println!("Sections: {:?}", reader.section_names().collect::<Vec<_>>());

    // Check if specific sections exist
    println!("Has 'General' section: {}", reader.section_exist("General"));
    println!("Has 'Rules' section: {}", reader.section_exist("Rules"));

    // Get values from sections
    let general = reader.get("General")?;
    println!("API mode: {}", general.get("api_mode").to_bool()?);
    println!("Default URL: '{}'", general.get("default_url").to_string()?);
    println!("Enable insert: {}", general.get("enable_insert").to_bool()?);

    // The later assignment wins
    println!("Max retries: {}", general.get("max_retries").to_int()?);

    // Missing keys fall back to the supplied default
    println!("Timeout: {}", general.get("timeout").to_double_or(30.0)?);

    // ...or fail when no default is given
    if let Err(e) = general.get("timeout").to_double() {
        println!("Expected error: {}", e);
    }

    // Unknown sections are always an error
    match reader.get("Rules") {
        Err(e) if e.kind() == IniErrorKind::SectionNotFound => println!("Expected error: {}", e),
        Err(e) => println!("Unexpected error: {}", e),
        Ok(section) => println!("Unexpected section: {}", section.name()),
    }

    // Walk a whole section
    for (key, value) in reader.get("Proxy")? {
        println!("Proxy {} -> '{}'", key, value);
    }

    Ok(())
}
