//! Scribe's main application entry point and orchestration logic.
//! Parses command-line arguments, renders the built-in README document or
//! synchronizes version markers, and reports the outcome.

use scribe::{
    cli::{get_args, Args},
    emitter::{render_document, write_document},
    error::{default_error_handler, Result},
    renderer::MiniJinjaEngine,
    version::sync_readme_version,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Flow
/// 1. Version-sync mode rewrites markers in the existing document
/// 2. Otherwise the built-in template is rendered and written in full
fn run(args: Args) -> Result<()> {
    if args.sync_version {
        return sync_readme_version(&args.file, args.parent);
    }

    let engine = MiniJinjaEngine::new();
    let document = render_document(&engine)?;
    write_document(&args.file, &document)?;
    println!("{} has been written successfully.", args.file.display());

    Ok(())
}
