use clap::*;
use noodles_fasta as fasta;
use std::io::Write;

use norf::{SequenceLocation, Strand};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("tsv")
        .about("Convert [Orf: ...] headers to a TSV table")
        .after_help(
            r###"
Reads FA records written by `norf find` and prints one row per record:

    #name  id  from  to  strand  incomplete_start  incomplete_end  len

* strand is printed as +/-
* len is the covered length in bases
* A record whose header carries no parseable token aborts the run;
  pre-filter headers you do not control

Examples:
1. Tabulate an ORF file:
   norf tsv orfs.fa

2. Save the output to a file:
   norf tsv orfs.fa -o orfs.tsv

"###,
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(1)
                .help("Input FA file(s) to process"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());

    //----------------------------
    // Ops
    //----------------------------
    // Write the header
    writer.write_fmt(format_args!(
        "#name\tid\tfrom\tto\tstrand\tincomplete_start\tincomplete_end\tlen\n"
    ))?;

    // Process each input file
    for infile in args.get_many::<String>("infiles").unwrap() {
        let reader = intspan::reader(infile);
        let mut fa_in = fasta::io::Reader::new(reader);

        // Process each record
        for result in fa_in.records() {
            // obtain record or fail with error
            let record = result?;
            let name = String::from_utf8(record.name().into())?;

            let header = match record.description() {
                Some(desc) => format!("{} {}", name, String::from_utf8(desc.to_vec())?),
                None => name.clone(),
            };
            let el = SequenceLocation::parse(&header)?;

            writer.write_fmt(format_args!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                name,
                el.id,
                el.from,
                el.to,
                match el.strand {
                    Strand::Plus => "+",
                    Strand::Minus => "-",
                },
                el.has_incomplete_start as i32,
                el.has_incomplete_end as i32,
                el.to - el.from,
            ))?;
        }
    }

    Ok(())
}
