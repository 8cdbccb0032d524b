// Lookup, render, write. Runs once per invocation after the answers have
// been collected.

use crate::answers::Answers;
use crate::api::ProfileLookup;
use crate::error::GenerateError;
use crate::output::write_document;
use crate::render::render_readme;
use std::path::{Path, PathBuf};

/// Produce the README at `output_path`. A failed lookup returns before the
/// file is touched, so there is never a partial document.
pub fn generate(
    answers: &Answers,
    lookup: &dyn ProfileLookup,
    output_path: &Path,
) -> Result<PathBuf, GenerateError> {
    let profile = lookup.fetch_profile(&answers.username)?;
    let document = render_readme(answers, &profile);
    write_document(output_path, &document)?;
    Ok(output_path.to_path_buf())
}
