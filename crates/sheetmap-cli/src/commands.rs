//! Subcommand implementations.
//!
//! Each command returns the text to print, so tests can assert on output
//! without capturing stdout.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};
use tracing::info;

use sheetmap_core::{DownloadSink, Session};

use crate::cli::{ExportArgs, HeadersArgs, ShowArgs};
use crate::display::{render_mapping, render_table};

pub fn run_show(args: &ShowArgs) -> Result<String> {
    let mut session = Session::new();
    session
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    for field in &args.sort {
        session.request_sort(field);
    }
    let table = session.table().context("table installed by load")?;
    let rendered = render_table(table, &session.display_order());
    Ok(format!("{rendered}\n{} rows\n", table.row_count()))
}

pub fn run_headers(args: &HeadersArgs) -> Result<String> {
    let mut session = Session::new();
    session
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    let table = session.table().context("table installed by load")?;
    Ok(table.header().join("\n") + "\n")
}

pub fn run_export(args: &ExportArgs) -> Result<String> {
    let mut session = Session::new();
    session
        .load_file(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    for spec in &args.map {
        let Some((source, target)) = spec.split_once('=') else {
            bail!("invalid --map value {spec:?}, expected SOURCE=TARGET");
        };
        session.map_column(source, target);
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let mut sink = DirectorySink {
        dir: output_dir,
        written: None,
    };
    session.export_to(&mut sink)?;
    let written = sink.written.context("sink recorded the written path")?;
    info!(path = %written.display(), "wrote export");

    Ok(format!(
        "{}\nwrote {}\n",
        render_mapping(session.mapping()),
        written.display()
    ))
}

/// Download collaborator that lands the payload in a directory.
struct DirectorySink {
    dir: PathBuf,
    written: Option<PathBuf>,
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, filename: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        self.written = Some(path);
        Ok(())
    }
}
