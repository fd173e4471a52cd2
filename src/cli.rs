// Command line interface and interactive prompts
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Context,
    Result,
};
use clap::{
    crate_description,
    crate_name,
    crate_version,
    ArgMatches,
    Command,
};
use crate::common::{
    RunConfig,
    ScanMode,
};
use std::io::{
    BufRead,
    Write,
};
use tracing::debug;

// Only these answers are accepted to yes/no questions.
const YES: &str = "Y";
const NO: &str = "n";

const WELCOME: &str = "\nWelcome to the AWS S3 Analytics Tool! This tool will help you map \
                       your S3 costs for each bucket in your account.\n";

const PREFIX_QUESTION: &str = "By default, we will entirely scan each bucket in your \
                               account using the default prefix ('/'). Do you want to \
                               scan a specific bucket prefix? (Y/n): ";

const BUCKET_QUESTION: &str = "Type the bucket name that you want to analyse a specific \
                               prefix: ";

const METADATA_QUESTION: &str = "Do you want to enable additional metrics? (Y/n): ";

// Create clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .after_help(
            "All options are asked for interactively. AWS credentials and \
             region are taken from the standard AWS configuration.",
        )
}

/// Parse the command line.
///
/// There are no options, this only handles `--help` and `--version`.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Asks the questions that make up a `RunConfig`.
///
/// Generic over the input and output so it can be driven by something other
/// than a terminal.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input:  R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Create a new `Prompter` reading answers from `input` and writing
    /// questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
        }
    }

    // Write the question and read one line, without its line ending.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self.input.read_line(&mut answer)
            .context("Failed to read answer")?;

        if read == 0 {
            bail!("Input closed before all questions were answered");
        }

        let answer = answer.trim_end_matches(['\r', '\n']).to_string();

        debug!("ask: got answer {:?}", answer);

        Ok(answer)
    }

    /// Ask `question` until the answer is exactly `Y` or `n`.
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(question)?;

            match answer.as_str() {
                YES => return Ok(true),
                NO  => return Ok(false),
                _   => continue,
            }
        }
    }

    /// Ask `question` until the answer isn't empty.
    pub fn ask_non_empty(&mut self, question: &str) -> Result<String> {
        loop {
            let answer = self.ask(question)?;

            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Print the welcome banner and ask every question, returning the
    /// resulting `RunConfig`.
    pub fn run_config(&mut self) -> Result<RunConfig> {
        writeln!(self.output, "{WELCOME}")?;

        let scan_mode = if self.ask_yes_no(PREFIX_QUESTION)? {
            let bucket = self.ask_non_empty(BUCKET_QUESTION)?;

            let prefix_question = format!(
                "Type the prefix that you want to analyse for the bucket {bucket}: ",
            );
            let prefix = self.ask_non_empty(&prefix_question)?;

            ScanMode::SinglePrefix {
                bucket,
                prefix,
            }
        }
        else {
            ScanMode::AllBuckets
        };

        let include_metadata = self.ask_yes_no(METADATA_QUESTION)?;

        let config = RunConfig {
            scan_mode,
            include_metadata,
        };

        debug!("run_config: {:?}", config);

        Ok(config)
    }
}
