//! `shift-css types`

use anyhow::Context;
use serde::Serialize;
use shift_project::{detect_types_framework, generate_typings};
use standout_dispatch::{HandlerResult, Output, OutputDestination};

use crate::cli::TypesArgs;
use crate::project::Project;

#[derive(Debug, Serialize)]
pub struct TypesReport {
    pub framework: Option<&'static str>,
    pub detected: bool,
    pub file: String,
    pub published_types: Option<&'static str>,
}

/// Writes the declarations to `--file`, or returns them as the output.
pub fn run(args: &TypesArgs, project: &Project) -> HandlerResult<TypesReport> {
    let (framework, detected) = match args.framework() {
        Some(fw) => (Some(fw), false),
        None => {
            let fw = detect_types_framework(&project.root);
            if let Some(fw) = fw {
                log::info!("detected {} from package.json", fw.display_name());
            }
            (fw, fw.is_some())
        }
    };
    let dts = generate_typings(framework);

    let Some(file) = &args.file else {
        return Ok(Output::Binary {
            data: dts.into_bytes(),
            filename: "shift.d.ts".to_string(),
        });
    };
    let path = project.resolve(file);
    OutputDestination::File(path.clone())
        .write_text(&dts)
        .with_context(|| format!("could not write {}", path.display()))?;

    Ok(Output::Render(TypesReport {
        framework: framework.map(|fw| fw.display_name()),
        detected,
        file: file.display().to_string(),
        published_types: framework.and_then(|fw| fw.published_types()),
    }))
}
