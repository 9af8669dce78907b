use clap::builder::NonEmptyStringValueParser;
use clap::{crate_authors, crate_description, crate_name, crate_version};
use clap::{Arg, Command};

use crate::bookmarks::json::DEFAULT_OUTPUT_FILE;

pub fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!("\n"))
        .about(crate_description!())
        // optional here, a missing spreadsheet is reported with its own exit code
        .arg(
            Arg::new("spreadsheet")
                .help("the spreadsheet to convert: xlsx, xlsm, xlsb, xls, xla or ods.")
                .value_name("SPREADSHEET")
                .num_args(1)
                .required(false),
        )
        .arg(
            Arg::new("output")
                .help("where to write the frequency manager config.")
                .value_name("FILE")
                .value_parser(NonEmptyStringValueParser::new())
                .long("output")
                .short('o')
                .num_args(1)
                .default_value(DEFAULT_OUTPUT_FILE),
        )
        .arg(
            Arg::new("debug")
                .help("debug info")
                .long("debug")
                .short('d')
                .action(clap::ArgAction::SetTrue),
        )
}
