mod args;
mod bookmarks;
mod errors;
mod types;

use std::env::{set_var, var_os};
use std::process;
use std::time::Instant;

use args::command;
use bookmarks::excel::check_extension;
use bookmarks::json::DEFAULT_OUTPUT_FILE;
use bookmarks::types::FrequencyManagerConfig;
use clap::ArgMatches;
use errors::ConvertError;
use log::{debug, info};

fn main() {
    let matches = command().get_matches();

    let debug = matches.get_flag("debug");
    if debug {
        set_var("RUST_LOG", "debug");
    } else if var_os("RUST_LOG").is_none() {
        set_var("RUST_LOG", "off");
    }
    env_logger::init();
    debug!("in debug mode");

    match run(&matches) {
        Ok(()) => println!("\nConversion Completed Successfully.\n"),
        Err(err) => {
            debug!("{:?}", err);
            println!(
                "\n\n\nError!\n{}\nFix the error and re-run this program.\n",
                err
            );
            process::exit(err.exit_code());
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), ConvertError> {
    let spreadsheet = matches
        .get_one::<String>("spreadsheet")
        .map(|s| s.trim())
        .ok_or(ConvertError::MissingArgument)?;
    println!("Converting Spreadsheet: {}", spreadsheet);

    check_extension(spreadsheet)?;

    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_OUTPUT_FILE);

    let started = Instant::now();
    let config = FrequencyManagerConfig::from_excel_file(spreadsheet)?;
    config.to_json_file(output)?;
    info!(
        "wrote {} list(s) to {} in {:?}",
        config.lists.len(),
        output,
        started.elapsed()
    );

    Ok(())
}

#[cfg(test)]
mod main_tests {
    use std::fs;
    use std::path::Path;

    use rust_xlsxwriter::Workbook;
    use tempfile::TempDir;

    use super::*;
    use crate::types::Mode;

    fn write_band_plan(path: &Path) {
        let mut workbook = Workbook::new();

        let vhf = workbook.add_worksheet();
        vhf.set_name("VHF").unwrap();
        for (col, title) in ["Name", "Frequency", "Frequency Units", "Bandwidth", "Mode"]
            .iter()
            .enumerate()
        {
            vhf.write_string(0, col as u16, *title).unwrap();
        }
        vhf.write_string(1, 0, "Repeater1").unwrap();
        vhf.write_number(1, 1, 146.94).unwrap();
        vhf.write_string(1, 2, "MHz").unwrap();
        vhf.write_number(1, 3, 12500).unwrap();
        vhf.write_string(1, 4, "NFM").unwrap();

        let hf = workbook.add_worksheet();
        hf.set_name("HF").unwrap();
        hf.write_string(0, 0, "ShowOnWaterfall=True").unwrap();
        hf.write_string(2, 0, "Name").unwrap();
        hf.write_string(3, 0, "WWV").unwrap();
        hf.write_number(3, 1, 10000).unwrap();
        hf.write_string(3, 2, "kHz").unwrap();
        hf.write_number(3, 3, 5000).unwrap();
        hf.write_string(3, 4, "AM").unwrap();

        workbook.save(path).unwrap();
    }

    #[test]
    fn converts_two_worksheets() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("band_plan.xlsx");
        let output = dir.path().join(DEFAULT_OUTPUT_FILE);
        write_band_plan(&input);

        let matches = command().get_matches_from([
            "sdrpp-freqman",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        run(&matches).unwrap();

        let config: FrequencyManagerConfig =
            serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
        let keys: Vec<&str> = config.lists.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["VHF", "HF"]);
        assert_eq!(config.selected_list, "HF");
        assert_eq!(config.bookmark_display_mode, 1);

        let repeater = &config.lists["VHF"].bookmarks["Repeater1"];
        assert_eq!(repeater.bandwidth, 12_500);
        assert_eq!(repeater.frequency, 146_940_000);
        assert_eq!(repeater.mode, Mode::Nfm);
        assert!(!config.lists["VHF"].show_on_waterfall);

        let wwv = &config.lists["HF"].bookmarks["WWV"];
        assert_eq!(wwv.frequency, 10_000_000);
        assert_eq!(wwv.mode, Mode::Am);
        assert!(config.lists["HF"].show_on_waterfall);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("band_plan.xlsx");
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        write_band_plan(&input);

        for output in [&first, &second] {
            let matches = command().get_matches_from([
                "sdrpp-freqman",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
            ]);
            run(&matches).unwrap();
        }

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn missing_spreadsheet_argument() {
        let matches = command().get_matches_from(["sdrpp-freqman"]);
        assert_eq!(run(&matches).unwrap_err().exit_code(), -1);
    }

    #[test]
    fn unopenable_workbook() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("absent.xlsx");
        let output = dir.path().join(DEFAULT_OUTPUT_FILE);
        let matches = command().get_matches_from([
            "sdrpp-freqman",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ]);

        assert_eq!(run(&matches).unwrap_err().exit_code(), -3);
        assert!(!output.exists());
    }
}
