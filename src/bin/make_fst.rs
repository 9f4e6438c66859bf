
use fst::SetBuilder;

use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    BufWriter,
};
use std::time::Instant;

use std::path::PathBuf;
use anyhow::{Context, Result};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "make_fst", about = "Create a fst file from a word list, this can be useful for faster loading")]
struct Opt {
    /// The input list. One word per line
    #[structopt(short = "i", long = "input-list", parse(from_os_str))]
    list_file: PathBuf,

    /// The output in which to store the compressed dictionary
    #[structopt(short = "o", long = "output-fst", parse(from_os_str))]
    fst_file: PathBuf,
}

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let Opt { list_file, fst_file } = Opt::from_args();

    let start = Instant::now();
    let file = BufReader::new(File::open(list_file).context("opening the words list file")?);
    let mut words = vec![];
    for line in file.lines() {
        let word = line.context("reading line from word list")?;
        let word = word.trim();
        if word.is_empty() {
            continue
        }
        // the dictionary only holds uppercase ascii words
        if !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            log::warn!("skipping entry that is not only ascii letters: {:?}", word);
            continue
        }
        words.push(word.to_ascii_uppercase());
    }
    log::info!("{} words loaded in {:?}", words.len(), Instant::now() - start);

    let start = Instant::now();
    words.sort_unstable();
    words.dedup();
    log::info!("words sorted in {:?}", Instant::now() - start);

    let start = Instant::now();
    let wtr = BufWriter::new(File::create(fst_file).context("create the words fst file")?);
    let mut build = SetBuilder::new(wtr).context("builder writing to fst file")?;
    build.extend_iter(words)?;
    build.finish()?;
    log::info!("dictionary written in {:?}", Instant::now() - start);

    Ok(())
}
