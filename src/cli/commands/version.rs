//! Version command

use anyhow::Result;

use crate::cli::Output;

pub async fn execute(output: &Output) -> Result<()> {
    println!("{} {}", crate::PKG_NAME, crate::VERSION);
    output.info(crate::PKG_DESCRIPTION);
    Ok(())
}
