use clap::{error::ErrorKind, Parser};
use pdfchunk::{
    app::document::PdfLoader,
    config::{StartArgs, OUTPUT_FILE},
    core::chunk::ChunkConfig,
};
use std::{path::Path, process::ExitCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = match StartArgs::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from(args.log()))
        .with_writer(std::io::stderr)
        .init();

    match pdfchunk::run(
        &PdfLoader,
        &args.file,
        &ChunkConfig::default(),
        Path::new(OUTPUT_FILE),
    ) {
        Ok(count) => {
            println!("Split into {count} chunks");
            ExitCode::SUCCESS
        }
        Err(e) => {
            e.print();
            ExitCode::from(1)
        }
    }
}
