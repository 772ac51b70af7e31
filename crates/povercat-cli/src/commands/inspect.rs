use std::path::Path;

use miette::Result;

use povercat_ops::ops_inspect::{describe, load_catalog};

pub fn exec(catalog: &Path) -> Result<()> {
    let parsed = load_catalog(catalog)?;
    for line in describe(&parsed) {
        println!("{line}");
    }
    Ok(())
}
