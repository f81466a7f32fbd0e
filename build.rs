// Compiles data/catalog.ron into a postcard blob that the library embeds with
// include_bytes!, so the runtime never touches the filesystem for game data.

use schema::CatalogData;
use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog_path = Path::new("data").join("catalog.ron");
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let source = fs::read_to_string(&catalog_path)?;
    let catalog: CatalogData = ron::from_str(&source)?;

    for starter in &catalog.starters {
        if catalog.find(starter).is_none() {
            return Err(format!("Starter '{}' is not a catalog template", starter).into());
        }
    }

    let bytes = catalog
        .to_postcard()
        .map_err(|e| format!("Failed to encode catalog: {}", e))?;
    let out_dir = env::var("OUT_DIR")?;
    fs::write(Path::new(&out_dir).join("catalog.bin"), bytes)?;

    Ok(())
}
