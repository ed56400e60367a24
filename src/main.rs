//! coco2pascal command-line entry point

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use coco2pascal::{ConvertConfig, Converter};

const PROGRAM: &str = env!("CARGO_PKG_NAME");

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [data_dir, data_type] = args.as_slice() else {
        println!("usage: {} <dataDir> <dataType>", PROGRAM);
        println!("for example: {} './' 'val2014'", PROGRAM);
        return ExitCode::FAILURE;
    };

    let config = ConvertConfig::default();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();
    log::debug!("Log level: {:?}", config.log_level);

    let stdout = std::io::stdout();
    let mut progress = stdout.lock();

    let converter = Converter::new(config);
    let result = converter
        .run(Path::new(data_dir), data_type, &mut progress)
        .and_then(|summary| progress.flush().map(|()| summary).map_err(Into::into));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
