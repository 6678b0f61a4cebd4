//! Embeds git metadata for the version string shown in the settings editor.

use vergen_gitcl::{Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gitcl = GitclBuilder::default().sha(true).dirty(false).build()?;
    Emitter::default().add_instructions(&gitcl)?.emit()?;
    Ok(())
}
