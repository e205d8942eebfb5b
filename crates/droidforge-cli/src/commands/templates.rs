//! Implementation of the `droidforge templates` command.
//!
//! Prints the fixed template mapping: which template produces which file in
//! the generated project. With `--templates-dir`, also flags mapped templates
//! missing from that directory.

use std::collections::HashSet;
use std::path::PathBuf;

use droidforge_adapters::DirectoryStore;
use droidforge_core::{application::ports::TemplateStore, domain::TemplateMapping};

use crate::{
    cli::TemplatesArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let mapping = TemplateMapping::standard();

    // With a directory store, cross-check the mapping against its contents.
    let present: Option<HashSet<String>> = match args.templates_dir {
        Some(path) => Some(directory_ids(path)?),
        None => None,
    };

    output.header(&format!("Template set ({} files):", mapping.len()))?;
    for entry in mapping.entries() {
        let line = format!("  {:<55} -> {}", entry.template.to_string(), entry.output);
        match &present {
            Some(ids) if !ids.contains(entry.template.as_str()) => {
                output.warning(&format!("{line}  (missing from directory)"))?;
            }
            _ => output.print(&line)?,
        }
    }

    Ok(())
}

fn directory_ids(path: PathBuf) -> CliResult<HashSet<String>> {
    let store = DirectoryStore::new(&path).map_err(|e| CliError::TemplateDirError {
        path,
        source: Box::new(e),
    })?;
    let ids = store.list().map_err(CliError::Core)?;
    Ok(ids.into_iter().map(|id| id.to_string()).collect())
}
